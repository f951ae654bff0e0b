mod common;

use common::create_test_garden;
use garden_core::{
    params::{AddHarvest, BedStatsQuery, CreateBed, CreatePlant, Id, TransitionStatus, YearQuery},
    validation::current_year,
    HarvestUnit, PlantStatus, Season,
};
use jiff::civil::date;

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_season_workflow() {
    let (_temp_dir, garden) = create_test_garden().await;
    let year = current_year();
    let harvest_day = date(year as i16, 8, 15);

    let bed = garden
        .create_bed(&CreateBed {
            name: "Kitchen Bed".to_string(),
            dimensions: "4x8".to_string(),
            notes: Some("Full sun".to_string()),
        })
        .await
        .expect("Failed to create bed");

    let mut tomatoes = CreatePlant::new("Tomato", date(year as i16, 4, 20), bed.location());
    tomatoes.variety = Some("Sungold".to_string());
    tomatoes.quantity = Some(3);
    tomatoes.season = Some(Season::Summer);
    let tomato = garden
        .create_plant(&tomatoes)
        .await
        .expect("Failed to create tomato");

    let mut beans = CreatePlant::new("Bean", date(year as i16, 5, 1), format!("{}", bed.id));
    beans.quantity = Some(4);
    beans.space_required = Some(1);
    let bean = garden.create_plant(&beans).await.expect("Failed to create beans");

    // Walk the tomatoes up to FLOWERING
    for status in [PlantStatus::Sprouted, PlantStatus::Flowering] {
        garden
            .transition_plant_status(&TransitionStatus {
                id: tomato.id,
                status,
            })
            .await
            .expect("Failed to transition tomato");
    }

    // Beans cannot be harvested yet
    let err = garden
        .record_harvest(&AddHarvest {
            plant_id: bean.id,
            harvest_date: harvest_day,
            quantity: 1.0,
            unit: HarvestUnit::Lbs,
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("FLOWERING or HARVESTING"));

    for (quantity, unit) in [(24.0, HarvestUnit::Oz), (1.0, HarvestUnit::Kg)] {
        garden
            .record_harvest(&AddHarvest {
                plant_id: tomato.id,
                harvest_date: harvest_day,
                quantity,
                unit,
                notes: None,
            })
            .await
            .expect("Failed to record tomato harvest");
    }

    let tomato = garden.get_plant(&Id { id: tomato.id }).await.unwrap();
    assert_eq!(tomato.status, PlantStatus::Harvesting);

    let bed = garden.get_bed(&Id { id: bed.id }).await.unwrap();
    assert_eq!(bed.plants.len(), 2);

    let bed_stats = garden
        .bed_stats(&BedStatsQuery {
            bed_id: bed.id,
            year: Some(year),
        })
        .await
        .unwrap();
    assert_eq!(bed_stats.total_plants, 7);
    assert_eq!(bed_stats.total_space_used, 16);
    assert_eq!(bed_stats.space_utilization, "50.0%");
    assert_eq!(bed_stats.plants_by_status.harvesting, 3);
    assert_eq!(bed_stats.plants_by_status.planted, 4);
    assert_eq!(bed_stats.plants_by_season.summer, 3);

    let producers = garden.top_producers(&YearQuery { year: Some(year) }).await.unwrap();
    assert_eq!(producers.len(), 1);
    assert_eq!(producers[0].name, "Tomato");
    assert_eq!(producers[0].harvest_count, 2);
    assert!((producers[0].total_pounds - 3.70462).abs() < 1e-6);

    let timeline = garden.harvest_timeline(&YearQuery { year: Some(year) }).await.unwrap();
    assert_eq!(timeline.series.len(), 1);
    assert_eq!(timeline.series[0].x, vec![format!("{year:04}-08")]);

    let metrics = garden.dashboard_metrics(&YearQuery { year: Some(year) }).await.unwrap();
    assert_eq!(metrics.total_plants, 7);
    assert_eq!(metrics.active_plants, 7);
    assert_eq!(metrics.harvest_count, 2);
    assert_eq!(metrics.space_utilization, 50.0);

    // Ranking needs at least five plants under a name
    let ranking = garden.success_rate_ranking(&YearQuery::default()).await.unwrap();
    assert!(ranking.is_empty());

    let chart = garden.plants_by_year_chart().await.unwrap();
    assert_eq!(chart.series[0].x, vec![year.to_string()]);
    assert_eq!(chart.series[0].y, vec![7.0]);

    // Removing the bed removes everything recorded in it
    garden.delete_bed(&Id { id: bed.id }).await.unwrap();
    let overall = garden.overall_stats().await.unwrap();
    assert_eq!(overall.total_plants, 0);
    assert_eq!(
        garden.available_years().await.unwrap(),
        vec![year + 1, year]
    );
}
