//! Aggregate document tests against hand-built and generated stores.

use chrono::NaiveDate;
use funding_core::{
    clock::GenerationClock,
    config::GeneratorConfig,
    engine::GeneratorEngine,
    investor_sampler::InvestorRecord,
    report::ReportDocument,
    round_sampler::FundingRoundRecord,
    startup_sampler::StartupRecord,
    store::FundingStore,
    types::{InvestorKind, Stage},
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn empty_store() -> FundingStore {
    let store = FundingStore::in_memory().unwrap();
    store.rebuild_schema().unwrap();
    store.create_views().unwrap();
    store
}

fn investor(id: &str, name: &str) -> InvestorRecord {
    InvestorRecord {
        investor_id: id.into(),
        name: name.into(),
        kind: InvestorKind::Venture,
        focus: vec!["Fintech".into()],
    }
}

fn startup(id: &str, name: &str, industry: &str) -> StartupRecord {
    StartupRecord {
        startup_id: id.into(),
        name: name.into(),
        industry: industry.into(),
        sub_industry: "Payments".into(),
        founded_date: d(2020, 2, 1),
        description: "Payments platform for enterprise customers".into(),
        website: format!("https://{}.com", name.to_lowercase()),
        headquarters: "Boston, MA".into(),
    }
}

fn round(id: &str, startup_id: &str, stage: Stage, amount: i64, date: NaiveDate) -> FundingRoundRecord {
    FundingRoundRecord {
        round_id: id.into(),
        startup_id: startup_id.into(),
        stage,
        amount_usd: amount,
        funding_date: date,
        lead_investor_id: "i-1".into(),
        valuation_usd: amount * 12,
        announced: true,
    }
}

#[test]
fn single_series_a_round_overview() {
    let store = empty_store();
    store.insert_investor(&investor("i-1", "Accel")).unwrap();
    store.insert_startup(&startup("s-1", "NovaPulse", "Fintech")).unwrap();
    store
        .insert_round(&round("r-1", "s-1", Stage::SeriesA, 10_000_000, d(2022, 5, 10)))
        .unwrap();

    let doc = ReportDocument::build(&store).unwrap();
    let o = &doc.overview;
    assert_eq!(o.total_funding, 10_000_000);
    assert_eq!(o.avg_deal_size, Some(10_000_000));
    assert_eq!(o.avg_valuation, Some(120_000_000));
    assert_eq!((o.total_startups, o.total_rounds, o.total_investors), (1, 1, 1));
    assert_eq!(o.min_date.as_deref(), Some("2022-05-10"));
    assert_eq!(o.max_date.as_deref(), Some("2022-05-10"));
    assert_eq!(o.top_industry, "Fintech");

    assert_eq!(doc.top_investors.len(), 1);
    assert_eq!(doc.top_investors[0].name, "Accel");
    assert_eq!(doc.top_investors[0].kind, "vc");
    assert_eq!(doc.top_investors[0].total_invested, 10_000_000);

    let company = &doc.companies[0];
    assert_eq!(company.latest_stage.as_deref(), Some("Series A"));
    assert_eq!(company.latest_valuation, Some(120_000_000));
    assert_eq!(company.rounds, 1);
}

#[test]
fn empty_store_reports_zeroes_and_placeholders() {
    let store = empty_store();
    store.insert_startup(&startup("s-1", "DeepGrid", "Climate Tech")).unwrap();

    let doc = ReportDocument::build(&store).unwrap();
    assert_eq!(doc.overview.total_funding, 0);
    assert_eq!(doc.overview.avg_deal_size, None);
    assert_eq!(doc.overview.min_date, None);
    assert_eq!(doc.overview.top_industry, "N/A");
    assert!(doc.stage_distribution.is_empty());

    let company = &doc.companies[0];
    assert_eq!((company.rounds, company.total_funding), (0, 0));
    assert_eq!(company.latest_stage, None);
}

#[test]
fn stage_distribution_follows_progression_order() {
    let store = empty_store();
    store.insert_investor(&investor("i-1", "Accel")).unwrap();
    store.insert_startup(&startup("s-1", "OpenSync", "Fintech")).unwrap();
    store.insert_startup(&startup("s-2", "TrueScale", "Fintech")).unwrap();
    // Text order would sort "Pre-Seed" after "Series B".
    store.insert_round(&round("r-1", "s-1", Stage::PreSeed, 1_000_000, d(2020, 9, 1))).unwrap();
    store.insert_round(&round("r-2", "s-1", Stage::Seed, 4_000_000, d(2021, 6, 1))).unwrap();
    store.insert_round(&round("r-3", "s-1", Stage::SeriesA, 20_000_000, d(2022, 8, 1))).unwrap();
    store.insert_round(&round("r-4", "s-2", Stage::PreSeed, 2_000_000, d(2021, 1, 1))).unwrap();
    store.insert_round(&round("r-5", "s-2", Stage::SeriesB, 50_000_000, d(2022, 2, 1))).unwrap();

    let doc = ReportDocument::build(&store).unwrap();
    let stages: Vec<_> = doc.stage_distribution.iter().map(|b| b.stage.as_str()).collect();
    assert_eq!(stages, vec!["Pre-Seed", "Seed", "Series A", "Series B"]);
    assert_eq!(doc.stage_distribution[0].count, 2);
    assert_eq!(doc.stage_distribution[0].avg, 1_500_000);

    let years: Vec<_> = doc
        .funding_by_year_stage
        .iter()
        .map(|r| (r.year.as_str(), r.stage.as_str()))
        .collect();
    assert_eq!(
        years,
        vec![
            ("2020", "Pre-Seed"),
            ("2021", "Pre-Seed"),
            ("2021", "Seed"),
            ("2022", "Series A"),
            ("2022", "Series B"),
        ]
    );

    assert_eq!(doc.companies[0].name, "TrueScale");
    assert_eq!(doc.companies[0].latest_stage.as_deref(), Some("Series B"));
    assert_eq!(doc.companies[1].latest_stage.as_deref(), Some("Series A"));
}

#[test]
fn overview_counts_match_generated_tables() {
    let store = FundingStore::in_memory().unwrap();
    let clock = GenerationClock::fixed(d(2025, 6, 1));
    let (dataset, counts) = GeneratorEngine::build(2718, GeneratorConfig::default(), clock)
        .unwrap()
        .generate_into(&store)
        .unwrap();

    let doc = ReportDocument::build(&store).unwrap();
    let o = &doc.overview;
    assert_eq!(o.total_startups, counts.startups);
    assert_eq!(o.total_startups, dataset.startups.len() as i64);
    assert_eq!(o.total_rounds, dataset.rounds.len() as i64);
    assert_eq!(o.total_investors, dataset.investors.len() as i64);
    assert_eq!(o.total_funding, dataset.rounds.iter().map(|r| r.amount_usd).sum::<i64>());

    assert_eq!(doc.companies.len(), dataset.startups.len());
    assert!(doc.top_investors.len() <= 20);
    assert!(doc
        .top_investors
        .windows(2)
        .all(|w| w[0].total_invested >= w[1].total_invested));
    assert!(doc
        .companies
        .windows(2)
        .all(|w| w[0].total_funding >= w[1].total_funding));
    assert!(doc
        .industry_breakdown
        .windows(2)
        .all(|w| w[0].total >= w[1].total));

    let ranks: Vec<_> = doc
        .stage_distribution
        .iter()
        .map(|b| Stage::from_label(&b.stage).unwrap())
        .collect();
    let mut sorted = ranks.clone();
    sorted.sort();
    assert_eq!(ranks, sorted);
}

#[test]
fn document_serializes_with_camel_case_keys() {
    let store = empty_store();
    let doc = ReportDocument::build(&store).unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    for key in [
        "overview",
        "fundingByYearStage",
        "stageDistribution",
        "industryBreakdown",
        "topInvestors",
        "companies",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(json["overview"].get("avgDealSize").is_some());
    assert!(json["overview"].get("topIndustry").is_some());
}
