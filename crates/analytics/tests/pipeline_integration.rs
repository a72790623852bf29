use restock_analytics::{
    AnalysisJob, DataPreprocessor, ForecastConfig, JobError, RecommendationEngine, ReorderPolicy,
    ReplenishmentInput, ReplenishmentJob, Status, analyze,
};
use restock_core::{AnalysisError, Dataset, RawRow, fields};

fn inventory_row(id: &str, description: &str, on_hand: &str, lead_time: &str) -> RawRow {
    RawRow::new()
        .with(fields::INVENTORY_ID, id)
        .with(fields::DESCRIPTION, description)
        .with(fields::ON_HAND_END, on_hand)
        .with(fields::AVG_PRICE, "")
        .with(fields::PURCHASE_PRICE, "")
        .with(fields::LEAD_TIME, lead_time)
}

fn sales_row(id: &str, date: &str, quantity: &str) -> RawRow {
    RawRow::new()
        .with(fields::INVENTORY_ID, id)
        .with(fields::SALES_DATE, date)
        .with(fields::SALES_QUANTITY, quantity)
        .with(fields::SALES_PRICE, "10")
        .with(fields::SALES_DOLLARS, "0")
}

/// Three items whose sales history yields forecasts of 9, 14 and 2.
fn scenario_input() -> ReplenishmentInput {
    ReplenishmentInput::new(
        vec![
            inventory_row("TEST_001", "Premium Vodka", "30", "5"),
            inventory_row("TEST_002", "Scotch Whisky", "45", "7"),
            inventory_row("TEST_025", "Bitters", "10", "2"),
        ],
        vec![
            sales_row("TEST_001", "2024-01-01", "9"),
            sales_row("TEST_002", "2024-01-01", "14"),
            sales_row("TEST_025", "2024-01-01", "2"),
        ],
    )
}

#[test]
fn scenarios_match_expected_recommendations() {
    let recs = analyze(
        &scenario_input(),
        ForecastConfig::default(),
        ReorderPolicy::default(),
    )
    .unwrap();
    assert_eq!(recs.len(), 3);

    let a = &recs[0];
    assert_eq!(a.inventory_id.as_str(), "TEST_001");
    assert_eq!(a.description, "Premium Vodka");
    assert_eq!(a.current_stock, 30.0);
    assert_eq!(a.predicted_demand, 9);
    assert_eq!(a.safety_stock, 9);
    assert_eq!(a.reorder_point, 54);
    assert_eq!(a.status, Status::Reorder);
    assert_eq!(a.action, "Plan to order 24 units");

    let b = &recs[1];
    assert_eq!(b.predicted_demand, 14);
    assert_eq!(b.safety_stock, 19);
    assert_eq!(b.reorder_point, 117);
    assert_eq!(b.status, Status::Reorder);
    assert_eq!(b.action, "Plan to order 72 units");

    let c = &recs[2];
    assert_eq!(c.predicted_demand, 2);
    assert_eq!(c.safety_stock, 0);
    assert_eq!(c.reorder_point, 4);
    assert_eq!(c.status, Status::Ok);
    assert_eq!(c.action, "No action needed");
}

#[test]
fn scenario_output_serializes_to_the_table_shape() {
    let recs = analyze(
        &scenario_input(),
        ForecastConfig::default(),
        ReorderPolicy::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&recs[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "InventoryId": "TEST_001",
            "Description": "Premium Vodka",
            "Current_Stock": 30,
            "Predicted_Demand": 9,
            "Safety_Stock": 9,
            "Reorder_Point": 54,
            "Status": "REORDER",
            "Action": "Plan to order 24 units",
        })
    );
}

#[test]
fn preprocessing_uses_population_standard_deviation() {
    let merged = DataPreprocessor::new()
        .process(
            &[inventory_row("A", "Rum", "100", "3")],
            &[
                sales_row("A", "2024-02-01", "5"),
                sales_row("A", "2024-02-02", "15"),
            ],
        )
        .unwrap();
    assert_eq!(merged[0].stats.avg_sales_quantity, 10.0);
    assert_eq!(merged[0].stats.std_sales_quantity, 5.0);
    assert_eq!(merged[0].features.sales_variability, 0.5);
}

#[test]
fn pipeline_is_byte_for_byte_deterministic() {
    let input = scenario_input();
    let first = serde_json::to_vec(
        &analyze(&input, ForecastConfig::default(), ReorderPolicy::default()).unwrap(),
    )
    .unwrap();
    let second = serde_json::to_vec(
        &analyze(&input, ForecastConfig::default(), ReorderPolicy::default()).unwrap(),
    )
    .unwrap();
    assert_eq!(first, second);

    let job = ReplenishmentJob::new(input);
    let r1 = job.run().unwrap();
    let r2 = job.run().unwrap();
    assert_ne!(r1.run_id, r2.run_id);
    assert_eq!(
        serde_json::to_vec(&r1.recommendations).unwrap(),
        serde_json::to_vec(&r2.recommendations).unwrap()
    );
    assert_eq!(r1.summary, r2.summary);
}

#[test]
fn json_rows_with_mixed_scalar_types_are_accepted() {
    let input: ReplenishmentInput = serde_json::from_str(
        r#"{
            "inventory": [
                {"InventoryId": 1001, "Description": "Tonic", "onHand_end": "12",
                 "AvgPrice": 3.5, "PurchasePrice": "2", "LeadTime": 2}
            ],
            "sales": [
                {"InventoryId": "1001", "SalesDate": "2024-03-01", "SalesQuantity": 4,
                 "SalesPrice": "3.5", "SalesDollars": 14},
                {"InventoryId": "1001.0", "SalesDate": "2024-03-02", "SalesQuantity": "4",
                 "SalesPrice": 3.5, "SalesDollars": "14"}
            ]
        }"#,
    )
    .unwrap();

    let report = ReplenishmentJob::new(input).run().unwrap();
    let rec = &report.recommendations[0];
    assert_eq!(rec.inventory_id.as_str(), "1001");
    // margin (3.5-2)/3.5, variability 0: 4 * (1 - 0.0428..) = 3.83 -> 4
    assert_eq!(rec.predicted_demand, 4);
    assert_eq!(rec.safety_stock, 1);
    assert_eq!(rec.reorder_point, 9);
    assert_eq!(rec.status, Status::Ok);
}

#[test]
fn missing_required_field_aborts_the_batch() {
    let mut input = scenario_input();
    input.inventory.push(
        RawRow::new()
            .with(fields::INVENTORY_ID, "TEST_099")
            .with(fields::ON_HAND_END, "3"),
    );

    let err = ReplenishmentJob::new(input).run().unwrap_err();
    match err {
        JobError::Analysis(e) => {
            assert_eq!(e, AnalysisError::missing(Dataset::Inventory, 3, fields::LEAD_TIME))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn misaligned_forecasts_are_rejected() {
    let input = scenario_input();
    let merged = DataPreprocessor::new()
        .process(&input.inventory, &input.sales)
        .unwrap();
    let err = RecommendationEngine::default()
        .recommend(&merged, &[9, 14])
        .unwrap_err();
    assert_eq!(err, AnalysisError::alignment(3, 2));
}

#[test]
fn sales_for_unknown_items_are_dropped() {
    let mut input = scenario_input();
    input.sales.push(sales_row("GHOST", "2024-01-01", "500"));
    let recs = analyze(&input, ForecastConfig::default(), ReorderPolicy::default()).unwrap();
    assert_eq!(recs.len(), 3);
    assert!(recs.iter().all(|r| r.inventory_id.as_str() != "GHOST"));
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn dataset() -> impl Strategy<Value = ReplenishmentInput> {
        let items = prop::collection::vec((0u32..2_000, 0u32..30), 1..20);
        let sales = prop::collection::vec((0usize..25, 0u32..200, 1u32..100), 0..60);
        (items, sales).prop_map(|(items, sales)| {
            let inventory: Vec<RawRow> = items
                .iter()
                .enumerate()
                .map(|(i, (on_hand, lead))| {
                    RawRow::new()
                        .with(fields::INVENTORY_ID, format!("ITEM_{i}"))
                        .with(fields::DESCRIPTION, format!("Item {i}"))
                        .with(fields::ON_HAND_END, on_hand.to_string())
                        .with(fields::AVG_PRICE, "20")
                        .with(fields::PURCHASE_PRICE, "12")
                        .with(fields::LEAD_TIME, lead.to_string())
                })
                .collect();
            let sales: Vec<RawRow> = sales
                .iter()
                .map(|(idx, qty, price)| {
                    RawRow::new()
                        .with(fields::INVENTORY_ID, format!("ITEM_{idx}"))
                        .with(fields::SALES_QUANTITY, qty.to_string())
                        .with(fields::SALES_PRICE, price.to_string())
                        .with(fields::SALES_DOLLARS, (qty * price).to_string())
                })
                .collect();
            ReplenishmentInput::new(inventory, sales)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: one recommendation per snapshot item, in order, with ordered thresholds.
        #[test]
        fn recommendations_uphold_invariants(input in dataset()) {
            let recs = analyze(&input, ForecastConfig::default(), ReorderPolicy::default()).unwrap();
            prop_assert_eq!(recs.len(), input.inventory.len());
            for (i, rec) in recs.iter().enumerate() {
                let expected_id = format!("ITEM_{i}");
                prop_assert_eq!(rec.inventory_id.as_str(), expected_id.as_str());
                prop_assert!(rec.predicted_demand >= 1);
                prop_assert!(rec.reorder_point >= rec.safety_stock);
                prop_assert!(Status::ALL.contains(&rec.status));
            }
        }

        /// Property: identical input gives identical serialized output.
        #[test]
        fn analysis_is_deterministic(input in dataset()) {
            let a = analyze(&input, ForecastConfig::default(), ReorderPolicy::default()).unwrap();
            let b = analyze(&input, ForecastConfig::default(), ReorderPolicy::default()).unwrap();
            prop_assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
        }
    }
}
