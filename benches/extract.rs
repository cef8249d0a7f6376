use std::hint::black_box;

use criterion::{ criterion_group, criterion_main, Criterion };
use scraper::Html;

use contract_scrape::config::consts::SourceKind;
use contract_scrape::specs::{ detect, extract_links };
use contract_scrape::specs::Strategy;

fn ranking_table(rows: usize) -> String {
    let mut html = String::from(
        r#"<table id="largest_contracts"><thead><tr><th>Rk</th><th>Player</th><th>Years</th><th>Value</th></tr></thead><tbody>"#,
    );
    for i in 0..rows {
        html.push_str(&format!(
            r#"<tr><th>{i}</th><td data-stat="player"><a href="/players/x/p{i}.shtml">Player {i}</a></td><td>{}</td><td>${i}M</td></tr>"#,
            i % 12
        ));
    }
    html.push_str("</tbody></table>");
    html
}

fn ranking_list(items: usize) -> String {
    let mut html = String::from("<ul>");
    for i in 0..items {
        html.push_str(&format!(
            r#"<li class="list-group-item"><div class="fs-3">{i}</div><div class="link">Player {i}</div><small>NYY, SP</small><span>x</span><span>${i}M</span></li>"#
        ));
    }
    html.push_str("</ul>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let table = ranking_table(500);
    let list = ranking_list(500);

    c.bench_function("ranking_table_parse_extract", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&table));
            let strategy = detect(&doc, SourceKind::BaseballReference);
            black_box(strategy.and_then(|s| s.extract(&doc)).map(|rs| rs.len()))
        })
    });

    c.bench_function("ranking_table_links", |b| {
        let doc = Html::parse_document(&table);
        b.iter(|| match detect(&doc, SourceKind::BaseballReference) {
            Some(Strategy::RankingTable(t)) => black_box(extract_links(t).len()),
            _ => 0,
        })
    });

    c.bench_function("ranking_list_parse_extract", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&list));
            let strategy = detect(&doc, SourceKind::Spotrac);
            black_box(strategy.and_then(|s| s.extract(&doc)).map(|rs| rs.len()))
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
