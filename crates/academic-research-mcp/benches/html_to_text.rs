use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;

use academic_research_mcp::formatters::{html_to_text, truncate_chars, truncate_data};
use academic_research_mcp::models::BulkSearchInput;

fn article_page(paragraphs: usize) -> String {
    let mut html = String::from(
        "<html><head><title>Survey</title><style>body { margin: 0 }</style>\
         <script>window.analytics = {id: 42};</script></head><body>",
    );
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<div class=\"section\"><h2>Section {i}</h2><p>Transformers &amp; attention \
             mechanisms <em>outperform</em> recurrent models on &lt;long&gt; sequences.</p>\
             <ul><li>point a</li><li>point b</li></ul></div>\n"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_html_to_text(c: &mut Criterion) {
    let small = article_page(10);
    c.bench_function("html_to_text_small_page", |b| b.iter(|| html_to_text(black_box(&small))));

    let large = article_page(2_000);
    c.bench_function("html_to_text_large_page", |b| b.iter(|| html_to_text(black_box(&large))));

    let plain = "no markup here ".repeat(1_000);
    c.bench_function("html_to_text_plain_input", |b| b.iter(|| html_to_text(black_box(&plain))));
}

fn bench_truncation(c: &mut Criterion) {
    let text = "über größe ".repeat(10_000);
    c.bench_function("truncate_chars_multibyte", |b| {
        b.iter(|| truncate_chars(black_box(text.clone()), 50_000))
    });

    let response = json!({
        "total": 1000,
        "token": "next",
        "data": (0..1000).map(|i| json!({"paperId": i, "title": "t"})).collect::<Vec<_>>()
    });
    c.bench_function("truncate_bulk_response", |b| {
        b.iter(|| {
            let mut value = response.clone();
            truncate_data(black_box(&mut value), 100)
        })
    });

    c.bench_function("bulk_query_params", |b| {
        let mut input = BulkSearchInput::new("(transformer | attention) + \"language model\"");
        input.year = Some("2020-".to_string());
        input.min_citation_count = 10;
        b.iter(|| black_box(&input).query_params())
    });
}

criterion_group!(benches, bench_html_to_text, bench_truncation);
criterion_main!(benches);
