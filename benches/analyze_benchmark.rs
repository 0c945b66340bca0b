//! Benchmarks for resume-ats.
//!
//! Run with: cargo bench
//!
//! Documents are synthetic PDFs built in memory with lopdf.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use resume_ats::{Corpus, ResumeAnalyzer};

const RESUME_LINE: &str = "Skilled in Java and software development. Seeking a Java Developer \
    position. Email: jane.smith@example.com, Phone: +1-987-654-3210";

/// Creates a synthetic PDF with the given number of pages.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for _ in 0..page_count {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 10.into()]),
                Operation::new("Td", vec![36.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(RESUME_LINE)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id =
            doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Benchmark PDF header detection.
fn bench_format_detection(c: &mut Criterion) {
    let pdf_data = create_test_pdf(1);
    let non_pdf_data = b"Not a PDF file at all, just random text content";

    c.bench_function("detect_valid_pdf", |b| {
        b.iter(|| resume_ats::detect_format_from_bytes(black_box(&pdf_data)).unwrap());
    });

    c.bench_function("detect_non_pdf", |b| {
        b.iter(|| resume_ats::detect_format_from_bytes(black_box(non_pdf_data)).is_err());
    });
}

/// Benchmark text extraction at various sizes.
fn bench_text_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_extraction");

    for page_count in [1, 5, 10].iter() {
        let data = create_test_pdf(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| resume_ats::extract_text(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark entity extraction over plain text.
fn bench_entities(c: &mut Criterion) {
    let text = RESUME_LINE.repeat(20);

    c.bench_function("extract_entities", |b| {
        b.iter(|| resume_ats::extract_entities(black_box(&text)));
    });

    c.bench_function("extract_contact", |b| {
        b.iter(|| resume_ats::extract_contact(black_box(&text)));
    });
}

/// Benchmark classifier training and inference.
fn bench_classifier(c: &mut Criterion) {
    let corpus = Corpus::reference();

    c.bench_function("train_reference_corpus", |b| {
        b.iter(|| resume_ats::classifier::train(black_box(&corpus)).unwrap());
    });

    let model = resume_ats::classifier::train(&corpus).unwrap();
    c.bench_function("predict_role", |b| {
        b.iter(|| model.predict(black_box(RESUME_LINE)));
    });
}

/// Benchmark the full pipeline with a pre-trained analyzer.
fn bench_pipeline(c: &mut Criterion) {
    let analyzer = ResumeAnalyzer::new().unwrap();
    let sequential = ResumeAnalyzer::builder().sequential().build().unwrap();
    let data = create_test_pdf(2);

    c.bench_function("analyze_bytes_parallel", |b| {
        b.iter(|| analyzer.analyze_bytes(black_box(&data)).unwrap());
    });

    c.bench_function("analyze_bytes_sequential", |b| {
        b.iter(|| sequential.analyze_bytes(black_box(&data)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_text_extraction,
    bench_entities,
    bench_classifier,
    bench_pipeline,
);
criterion_main!(benches);
