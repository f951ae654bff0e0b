//! Command handlers: call the garden façade and render the outcome.

use anyhow::{bail, Context, Result};
use garden_core::{
    display::{BedDeletion, Producers, Ranking, Years},
    params::{Id, UpdateBed, UpdatePlant, YearQuery},
    Beds, CreateResult, DeleteResult, Garden, Harvests, OperationStatus, Plants, UpdateResult,
};
use jiff::Zoned;
use log::debug;

use crate::{
    cli::{BedCommands, HarvestCommands, PlantCommands, StatsCommands, UpdateBedArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    garden: Garden,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(garden: Garden, renderer: TerminalRenderer) -> Self {
        Self { garden, renderer }
    }

    pub async fn handle_bed_command(&self, command: BedCommands) -> Result<()> {
        match command {
            BedCommands::Create(args) => {
                let bed = self
                    .garden
                    .create_bed(&args.into())
                    .await
                    .context("Failed to create bed")?;
                self.renderer
                    .output(&bed, &CreateResult::new(&bed).to_string())
            }
            BedCommands::List => {
                let beds = Beds(self.garden.list_beds().await.context("Failed to list beds")?);
                let markdown = format!("# Garden Beds\n\n{beds}");
                self.renderer.output(&beds.0, &markdown)
            }
            BedCommands::Show(args) => {
                let bed = self
                    .garden
                    .get_bed(&args.into())
                    .await
                    .context("Failed to get bed")?;
                self.renderer.output(&bed, &bed.to_string())
            }
            BedCommands::Update(args) => self.update_bed(args).await,
            BedCommands::Delete(args) => {
                if !args.confirm {
                    bail!(
                        "Deleting bed {} also deletes its plants, harvests and images. \
                         Pass --confirm to proceed.",
                        args.id
                    );
                }
                let bed = self
                    .garden
                    .delete_bed(&Id { id: args.id })
                    .await
                    .context("Failed to delete bed")?;
                self.renderer.output(&bed, &BedDeletion(bed.clone()).to_string())
            }
        }
    }

    /// Beds are replaced whole, so unspecified fields are read back first.
    async fn update_bed(&self, args: UpdateBedArgs) -> Result<()> {
        let current = self
            .garden
            .get_bed(&Id { id: args.id })
            .await
            .context("Failed to get bed")?;

        let mut changes = Vec::new();
        if let Some(ref name) = args.name {
            changes.push(format!("Name: {name}"));
        }
        if let Some(ref dimensions) = args.dimensions {
            changes.push(format!("Dimensions: {dimensions}"));
        }
        if let Some(ref notes) = args.notes {
            changes.push(format!("Notes: {notes}"));
        }

        if changes.is_empty() {
            let status = OperationStatus::failure(format!(
                "No changes specified for bed {}. Use --name, --dimensions or --notes.",
                args.id
            ));
            return self.renderer.output(&current, &status.to_string());
        }

        let params = UpdateBed {
            id: args.id,
            name: args.name.unwrap_or(current.name),
            dimensions: args.dimensions.unwrap_or(current.dimensions),
            notes: args.notes.or(current.notes),
        };
        let bed = self
            .garden
            .update_bed(&params)
            .await
            .context("Failed to update bed")?;
        self.renderer
            .output(&bed, &UpdateResult::with_changes(&bed, changes).to_string())
    }

    pub async fn handle_plant_command(&self, command: PlantCommands) -> Result<()> {
        match command {
            PlantCommands::Create(args) => {
                let plant = self
                    .garden
                    .create_plant(&args.into())
                    .await
                    .context("Failed to create plant")?;
                self.renderer
                    .output(&plant, &CreateResult::new(&plant).to_string())
            }
            PlantCommands::List(args) => {
                let plants = Plants(
                    self.garden
                        .list_plants(&args.into())
                        .await
                        .context("Failed to list plants")?,
                );
                let markdown = format!("# Plants\n\n{plants}");
                self.renderer.output(&plants.0, &markdown)
            }
            PlantCommands::Show(args) => {
                let plant = self
                    .garden
                    .get_plant(&args.into())
                    .await
                    .context("Failed to get plant")?;
                self.renderer.output(&plant, &plant.to_string())
            }
            PlantCommands::Update(args) => {
                let params: UpdatePlant = args.into();
                if params.is_empty() {
                    let status = OperationStatus::failure(format!(
                        "No changes specified for plant {}",
                        params.id
                    ));
                    return self.renderer.render(&status.to_string());
                }
                let changes = plant_changes(&params);
                let plant = self
                    .garden
                    .update_plant(&params)
                    .await
                    .context("Failed to update plant")?;
                self.renderer
                    .output(&plant, &UpdateResult::with_changes(&plant, changes).to_string())
            }
            PlantCommands::Advance(args) => {
                let plant = self
                    .garden
                    .advance_plant(&args.into())
                    .await
                    .context("Failed to advance plant")?;
                let changes = vec![format!("Status: {}", plant.status)];
                self.renderer
                    .output(&plant, &UpdateResult::with_changes(&plant, changes).to_string())
            }
            PlantCommands::Status(args) => {
                let plant = self
                    .garden
                    .transition_plant_status(&args.into())
                    .await
                    .context("Failed to change plant status")?;
                let changes = vec![format!("Status: {}", plant.status)];
                self.renderer
                    .output(&plant, &UpdateResult::with_changes(&plant, changes).to_string())
            }
            PlantCommands::Delete(args) => {
                let plant = self
                    .garden
                    .delete_plant(&args.into())
                    .await
                    .context("Failed to delete plant")?;
                self.renderer
                    .output(&plant, &DeleteResult::new(&plant).to_string())
            }
            PlantCommands::Image(args) => {
                let image = self
                    .garden
                    .add_plant_image(&args.into())
                    .await
                    .context("Failed to add plant image")?;
                self.renderer
                    .output(&image, &CreateResult::new(&image).to_string())
            }
        }
    }

    pub async fn handle_harvest_command(&self, command: HarvestCommands) -> Result<()> {
        match command {
            HarvestCommands::Add(args) => {
                let params = args.into_params(Zoned::now().date());
                debug!("Recording harvest for plant {}", params.plant_id);
                let harvest = self
                    .garden
                    .record_harvest(&params)
                    .await
                    .context("Failed to record harvest")?;
                self.renderer
                    .output(&harvest, &CreateResult::new(&harvest).to_string())
            }
            HarvestCommands::List(args) => {
                let id: Id = args.into();
                let harvests = Harvests(
                    self.garden
                        .list_harvests(&id)
                        .await
                        .context("Failed to list harvests")?,
                );
                let markdown = format!("# Harvests of Plant {}\n\n{harvests}", id.id);
                self.renderer.output(&harvests.0, &markdown)
            }
            HarvestCommands::Delete(args) => {
                let harvest = self
                    .garden
                    .delete_harvest(&args.into())
                    .await
                    .context("Failed to delete harvest")?;
                self.renderer
                    .output(&harvest, &DeleteResult::new(&harvest).to_string())
            }
        }
    }

    pub async fn handle_stats_command(&self, command: StatsCommands) -> Result<()> {
        match command {
            StatsCommands::Overview => {
                let stats = self
                    .garden
                    .overall_stats()
                    .await
                    .context("Failed to compute garden statistics")?;
                self.renderer.output(&stats, &stats.to_string())
            }
            StatsCommands::Bed(args) => {
                let stats = self
                    .garden
                    .bed_stats(&args.into())
                    .await
                    .context("Failed to compute bed statistics")?;
                self.renderer.output(&stats, &stats.to_string())
            }
            StatsCommands::Years => {
                let years = Years(
                    self.garden
                        .available_years()
                        .await
                        .context("Failed to list years")?,
                );
                self.renderer.output(&years.0, &years.to_string())
            }
            StatsCommands::Dashboard(args) => self.dashboard(&args.into()).await,
            StatsCommands::Timeline(args) => {
                let chart = self
                    .garden
                    .harvest_timeline(&args.into())
                    .await
                    .context("Failed to build harvest timeline")?;
                self.renderer.output(&chart, &chart.to_string())
            }
            StatsCommands::Success(args) => {
                let ranking = Ranking(
                    self.garden
                        .success_rate_ranking(&args.into())
                        .await
                        .context("Failed to rank success rates")?,
                );
                self.renderer.output(&ranking.0, &ranking.to_string())
            }
            StatsCommands::Top(args) => {
                let producers = Producers(
                    self.garden
                        .top_producers(&args.into())
                        .await
                        .context("Failed to rank producers")?,
                );
                self.renderer.output(&producers.0, &producers.to_string())
            }
            StatsCommands::ByYear => {
                let chart = self
                    .garden
                    .plants_by_year_chart()
                    .await
                    .context("Failed to build plants by year chart")?;
                self.renderer.output(&chart, &chart.to_string())
            }
        }
    }

    pub async fn dashboard(&self, params: &YearQuery) -> Result<()> {
        let metrics = self
            .garden
            .dashboard_metrics(params)
            .await
            .context("Failed to compute dashboard")?;
        self.renderer.output(&metrics, &metrics.to_string())
    }
}

fn plant_changes(params: &UpdatePlant) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(ref name) = params.name {
        changes.push(format!("Name: {name}"));
    }
    match params.variety {
        Some(Some(ref variety)) => changes.push(format!("Variety: {variety}")),
        Some(None) => changes.push("Variety cleared".to_string()),
        None => {}
    }
    if let Some(date) = params.planting_date {
        changes.push(format!("Planted: {date}"));
    }
    if let Some(season) = params.season {
        changes.push(format!("Season: {season}"));
    }
    if let Some(year) = params.year {
        changes.push(format!("Year: {year}"));
    }
    if let Some(quantity) = params.quantity {
        changes.push(format!("Quantity: {quantity}"));
    }
    if let Some(space) = params.space_required {
        changes.push(format!("Space: {space} sq ft"));
    }
    match params.expected_harvest_date {
        Some(Some(date)) => changes.push(format!("Expected harvest: {date}")),
        Some(None) => changes.push("Expected harvest cleared".to_string()),
        None => {}
    }
    match params.notes {
        Some(Some(_)) => changes.push("Notes".to_string()),
        Some(None) => changes.push("Notes cleared".to_string()),
        None => {}
    }
    if let Some(ref packet) = params.seed_packet {
        changes.push(format!("Seed packet: {} ({})", packet.code, packet.barcode_type));
    }
    changes
}
