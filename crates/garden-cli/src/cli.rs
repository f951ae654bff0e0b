//! Command-line argument wrappers.
//!
//! Each subcommand has a clap `Args` struct that converts into the matching
//! `garden_core::params` type, keeping clap attributes out of the core:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Garden operations
//! ```
//!
//! Raw values (negative quantities, unknown bed references) pass straight
//! through so the core validation reports them with the field name.

use clap::{Args, Subcommand, ValueEnum};
use garden_core::{params::*, BarcodeType, HarvestUnit, PlantStatus, Season, SeedPacket};
use jiff::civil::Date;

// ============================================================================
// Beds
// ============================================================================

/// Create a new garden bed
#[derive(Args)]
pub struct CreateBedArgs {
    /// Name of the bed
    pub name: String,
    /// Dimensions as LENGTHxWIDTH in feet, e.g. 4x8
    pub dimensions: String,
    #[arg(short, long, help = "Free-form notes about the bed")]
    pub notes: Option<String>,
}

impl From<CreateBedArgs> for CreateBed {
    fn from(val: CreateBedArgs) -> Self {
        CreateBed {
            name: val.name,
            dimensions: val.dimensions,
            notes: val.notes,
        }
    }
}

/// Show a bed with its plants
#[derive(Args)]
pub struct ShowBedArgs {
    #[arg(help = "Unique identifier of the bed to show")]
    pub id: u64,
}

impl From<ShowBedArgs> for Id {
    fn from(val: ShowBedArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a bed's name, dimensions or notes
///
/// Fields left out keep their current value.
#[derive(Args)]
pub struct UpdateBedArgs {
    #[arg(help = "Unique identifier of the bed to update")]
    pub id: u64,
    #[arg(long, help = "New name for the bed")]
    pub name: Option<String>,
    #[arg(long, help = "New dimensions as LENGTHxWIDTH, e.g. 4x8")]
    pub dimensions: Option<String>,
    #[arg(short, long, help = "New notes for the bed")]
    pub notes: Option<String>,
}

/// Delete a bed together with its plants, harvests and images
#[derive(Args)]
pub struct DeleteBedArgs {
    #[arg(help = "Unique identifier of the bed to delete")]
    pub id: u64,
    /// Confirm the deletion (required because it cascades to every plant)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum BedCommands {
    /// Create a new garden bed
    #[command(alias = "c")]
    Create(CreateBedArgs),
    /// List all beds
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a bed with its plants
    #[command(alias = "s")]
    Show(ShowBedArgs),
    /// Update a bed
    #[command(alias = "u")]
    Update(UpdateBedArgs),
    /// Delete a bed and everything in it
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteBedArgs),
}

// ============================================================================
// Plants
// ============================================================================

/// Seed packet options shared by plant create and update.
#[derive(Args)]
pub struct SeedPacketArgs {
    #[arg(long, requires = "barcode_type", help = "Barcode printed on the seed packet")]
    pub barcode: Option<String>,
    #[arg(long, value_enum, requires = "barcode", help = "Barcode symbology")]
    pub barcode_type: Option<BarcodeArg>,
    #[arg(long, requires = "barcode", help = "Product name from the seed packet")]
    pub product_name: Option<String>,
    #[arg(long, requires = "barcode", help = "Seed company")]
    pub manufacturer: Option<String>,
}

impl SeedPacketArgs {
    fn into_seed_packet(self) -> Option<SeedPacket> {
        match (self.barcode, self.barcode_type) {
            (Some(code), Some(barcode_type)) => Some(SeedPacket {
                code,
                barcode_type: barcode_type.into(),
                product_name: self.product_name,
                manufacturer: self.manufacturer,
            }),
            _ => None,
        }
    }
}

/// Plant a new batch in a bed
#[derive(Args)]
pub struct CreatePlantArgs {
    /// Plant name, e.g. Tomato
    pub name: String,
    /// Bed the plant grows in, as "Bed N" or just N
    pub location: String,
    #[arg(long, help = "Planting date (YYYY-MM-DD)")]
    pub planted: Date,
    #[arg(long, help = "Variety or cultivar")]
    pub variety: Option<String>,
    #[arg(long, value_enum, help = "Initial status (defaults to planted)")]
    pub status: Option<StatusArg>,
    #[arg(long, value_enum, help = "Growing season")]
    pub season: Option<SeasonArg>,
    #[arg(long, help = "Tracking year (defaults to the current year)")]
    pub year: Option<i32>,
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = "Number of plants in the batch (defaults to 1)"
    )]
    pub quantity: Option<i64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Square feet of bed needed per plant (defaults to 4)"
    )]
    pub space: Option<i64>,
    #[arg(long, help = "Expected first harvest date (YYYY-MM-DD)")]
    pub expected_harvest: Option<Date>,
    #[arg(short, long, help = "Free-form notes")]
    pub notes: Option<String>,
    #[command(flatten)]
    pub seed_packet: SeedPacketArgs,
}

impl From<CreatePlantArgs> for CreatePlant {
    fn from(val: CreatePlantArgs) -> Self {
        CreatePlant {
            name: val.name,
            variety: val.variety,
            planting_date: val.planted,
            location: val.location,
            status: val.status.map(Into::into),
            season: val.season.map(Into::into),
            year: val.year,
            quantity: val.quantity,
            space_required: val.space,
            expected_harvest_date: val.expected_harvest,
            notes: val.notes,
            seed_packet: val.seed_packet.into_seed_packet(),
        }
    }
}

/// List plants, optionally filtered
#[derive(Args)]
pub struct ListPlantsArgs {
    #[arg(long, help = "Only plants tracked in this year")]
    pub year: Option<i32>,
    #[arg(long, value_enum, help = "Only plants of this season")]
    pub season: Option<SeasonArg>,
    #[arg(long, value_enum, help = "Only plants with this status")]
    pub status: Option<StatusArg>,
    #[arg(long, help = "Only plants in this bed")]
    pub bed: Option<u64>,
}

impl From<ListPlantsArgs> for ListPlants {
    fn from(val: ListPlantsArgs) -> Self {
        ListPlants {
            year: val.year,
            season: val.season.map(Into::into),
            status: val.status.map(Into::into),
            bed_id: val.bed,
        }
    }
}

/// Identify a single plant
#[derive(Args)]
pub struct PlantIdArgs {
    #[arg(help = "Unique identifier of the plant")]
    pub id: u64,
}

impl From<PlantIdArgs> for Id {
    fn from(val: PlantIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update plant details
///
/// Status is changed with `plant advance` or `plant status`, never here.
#[derive(Args)]
pub struct UpdatePlantArgs {
    #[arg(help = "Unique identifier of the plant to update")]
    pub id: u64,
    #[arg(long, help = "New name")]
    pub name: Option<String>,
    #[arg(long, help = "New variety")]
    pub variety: Option<String>,
    #[arg(long, conflicts_with = "variety", help = "Remove the variety")]
    pub clear_variety: bool,
    #[arg(long, help = "New planting date (YYYY-MM-DD)")]
    pub planted: Option<Date>,
    #[arg(long, value_enum, help = "New growing season")]
    pub season: Option<SeasonArg>,
    #[arg(long, help = "New tracking year")]
    pub year: Option<i32>,
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = "New number of plants"
    )]
    pub quantity: Option<i64>,
    #[arg(long, allow_negative_numbers = true, help = "New space per plant")]
    pub space: Option<i64>,
    #[arg(long, help = "New expected harvest date (YYYY-MM-DD)")]
    pub expected_harvest: Option<Date>,
    #[arg(
        long,
        conflicts_with = "expected_harvest",
        help = "Remove the expected harvest date"
    )]
    pub clear_expected_harvest: bool,
    #[arg(short, long, help = "New notes")]
    pub notes: Option<String>,
    #[arg(long, conflicts_with = "notes", help = "Remove the notes")]
    pub clear_notes: bool,
    #[command(flatten)]
    pub seed_packet: SeedPacketArgs,
}

/// `Some(None)` when `clear` is set, otherwise the replacement if any.
fn set_or_clear<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

impl From<UpdatePlantArgs> for UpdatePlant {
    fn from(val: UpdatePlantArgs) -> Self {
        UpdatePlant {
            id: val.id,
            name: val.name,
            variety: set_or_clear(val.variety, val.clear_variety),
            planting_date: val.planted,
            season: val.season.map(Into::into),
            year: val.year,
            quantity: val.quantity,
            space_required: val.space,
            expected_harvest_date: set_or_clear(
                val.expected_harvest,
                val.clear_expected_harvest,
            ),
            notes: set_or_clear(val.notes, val.clear_notes),
            seed_packet: val.seed_packet.into_seed_packet(),
        }
    }
}

/// Move a plant to a specific status
///
/// Only the next status in the lifecycle is accepted.
#[derive(Args)]
pub struct SetStatusArgs {
    #[arg(help = "Unique identifier of the plant")]
    pub id: u64,
    #[arg(value_enum, help = "Requested status")]
    pub status: StatusArg,
}

impl From<SetStatusArgs> for TransitionStatus {
    fn from(val: SetStatusArgs) -> Self {
        TransitionStatus {
            id: val.id,
            status: val.status.into(),
        }
    }
}

/// Attach a photo URL to a plant
#[derive(Args)]
pub struct AddImageArgs {
    #[arg(help = "Unique identifier of the plant")]
    pub plant_id: u64,
    #[arg(help = "http(s) URL of the photo")]
    pub url: String,
    #[arg(short, long, help = "What the photo shows")]
    pub description: Option<String>,
}

impl From<AddImageArgs> for AddPlantImage {
    fn from(val: AddImageArgs) -> Self {
        AddPlantImage {
            plant_id: val.plant_id,
            url: val.url,
            description: val.description,
        }
    }
}

#[derive(Subcommand)]
pub enum PlantCommands {
    /// Plant a new batch in a bed
    #[command(alias = "c")]
    Create(CreatePlantArgs),
    /// List plants
    #[command(aliases = ["l", "ls"])]
    List(ListPlantsArgs),
    /// Show details of a plant
    #[command(alias = "s")]
    Show(PlantIdArgs),
    /// Update plant details
    #[command(alias = "u")]
    Update(UpdatePlantArgs),
    /// Advance a plant to its next lifecycle status
    #[command(alias = "a")]
    Advance(PlantIdArgs),
    /// Move a plant to a specific status
    Status(SetStatusArgs),
    /// Delete a plant with its harvests and images
    #[command(aliases = ["d", "rm"])]
    Delete(PlantIdArgs),
    /// Attach a photo URL to a plant
    #[command(alias = "i")]
    Image(AddImageArgs),
}

// ============================================================================
// Harvests
// ============================================================================

/// Record a harvest
///
/// A FLOWERING plant moves to HARVESTING with its first harvest.
#[derive(Args)]
pub struct AddHarvestArgs {
    #[arg(help = "Unique identifier of the plant harvested")]
    pub plant_id: u64,
    #[arg(allow_negative_numbers = true, help = "Amount harvested")]
    pub quantity: f64,
    #[arg(short, long, value_enum, default_value = "lbs", help = "Weight unit")]
    pub unit: UnitArg,
    #[arg(long, help = "Harvest date (YYYY-MM-DD), defaults to today")]
    pub date: Option<Date>,
    #[arg(short, long, help = "Free-form notes")]
    pub notes: Option<String>,
}

impl AddHarvestArgs {
    pub fn into_params(self, today: Date) -> AddHarvest {
        AddHarvest {
            plant_id: self.plant_id,
            harvest_date: self.date.unwrap_or(today),
            quantity: self.quantity,
            unit: self.unit.into(),
            notes: self.notes,
        }
    }
}

/// Delete one harvest of a plant
#[derive(Args)]
pub struct DeleteHarvestArgs {
    #[arg(help = "Unique identifier of the plant")]
    pub plant_id: u64,
    #[arg(help = "Unique identifier of the harvest")]
    pub harvest_id: u64,
}

impl From<DeleteHarvestArgs> for HarvestRef {
    fn from(val: DeleteHarvestArgs) -> Self {
        HarvestRef {
            plant_id: val.plant_id,
            harvest_id: val.harvest_id,
        }
    }
}

#[derive(Subcommand)]
pub enum HarvestCommands {
    /// Record a harvest
    #[command(alias = "a")]
    Add(AddHarvestArgs),
    /// List the harvests of a plant
    #[command(aliases = ["l", "ls"])]
    List(PlantIdArgs),
    /// Delete a harvest
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteHarvestArgs),
}

// ============================================================================
// Statistics
// ============================================================================

/// Select a year, defaulting to the current one
#[derive(Args)]
pub struct YearArgs {
    #[arg(long, help = "Calendar year (defaults to the current year)")]
    pub year: Option<i32>,
}

impl From<YearArgs> for YearQuery {
    fn from(val: YearArgs) -> Self {
        YearQuery { year: val.year }
    }
}

/// Statistics for a single bed
#[derive(Args)]
pub struct BedStatsArgs {
    #[arg(help = "Unique identifier of the bed")]
    pub bed_id: u64,
    #[arg(long, help = "Only count plants tracked in this year")]
    pub year: Option<i32>,
}

impl From<BedStatsArgs> for BedStatsQuery {
    fn from(val: BedStatsArgs) -> Self {
        BedStatsQuery {
            bed_id: val.bed_id,
            year: val.year,
        }
    }
}

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Plant counts across the whole garden
    #[command(alias = "o")]
    Overview,
    /// Counts and space utilization for one bed
    #[command(alias = "b")]
    Bed(BedStatsArgs),
    /// Years that have data, newest first
    #[command(alias = "y")]
    Years,
    /// Dashboard figures with trends against the prior year
    #[command(alias = "d")]
    Dashboard(YearArgs),
    /// Monthly harvest weight per plant
    #[command(alias = "t")]
    Timeline(YearArgs),
    /// Plant names ranked by the share that reached harvest
    Success(YearArgs),
    /// Plant names ranked by total harvest weight
    Top(YearArgs),
    /// Plants per tracking year
    ByYear,
}

// ============================================================================
// Value enums
// ============================================================================

/// Lifecycle status accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Planted,
    Sprouted,
    Flowering,
    Harvesting,
    Finished,
}

impl From<StatusArg> for PlantStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Planted => PlantStatus::Planted,
            StatusArg::Sprouted => PlantStatus::Sprouted,
            StatusArg::Flowering => PlantStatus::Flowering,
            StatusArg::Harvesting => PlantStatus::Harvesting,
            StatusArg::Finished => PlantStatus::Finished,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SeasonArg {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl From<SeasonArg> for Season {
    fn from(val: SeasonArg) -> Self {
        match val {
            SeasonArg::Spring => Season::Spring,
            SeasonArg::Summer => Season::Summer,
            SeasonArg::Fall => Season::Fall,
            SeasonArg::Winter => Season::Winter,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Lbs,
    Oz,
    G,
    Kg,
}

impl From<UnitArg> for HarvestUnit {
    fn from(val: UnitArg) -> Self {
        match val {
            UnitArg::Lbs => HarvestUnit::Lbs,
            UnitArg::Oz => HarvestUnit::Oz,
            UnitArg::G => HarvestUnit::G,
            UnitArg::Kg => HarvestUnit::Kg,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum BarcodeArg {
    Qr,
    Code128,
    Ean13,
    Upc,
}

impl From<BarcodeArg> for BarcodeType {
    fn from(val: BarcodeArg) -> Self {
        match val {
            BarcodeArg::Qr => BarcodeType::Qr,
            BarcodeArg::Code128 => BarcodeType::Code128,
            BarcodeArg::Ean13 => BarcodeType::Ean13,
            BarcodeArg::Upc => BarcodeType::Upc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_packet_requires_code_and_type() {
        let empty = SeedPacketArgs {
            barcode: None,
            barcode_type: None,
            product_name: None,
            manufacturer: None,
        };
        assert_eq!(empty.into_seed_packet(), None);

        let full = SeedPacketArgs {
            barcode: Some("012345678905".to_string()),
            barcode_type: Some(BarcodeArg::Upc),
            product_name: Some("Cherokee Purple".to_string()),
            manufacturer: None,
        };
        let packet = full.into_seed_packet().expect("packet should be built");
        assert_eq!(packet.barcode_type, BarcodeType::Upc);
        assert_eq!(packet.product_name.as_deref(), Some("Cherokee Purple"));
    }

    #[test]
    fn test_list_args_convert_filters() {
        let params: ListPlants = ListPlantsArgs {
            year: Some(2024),
            season: Some(SeasonArg::Fall),
            status: None,
            bed: Some(3),
        }
        .into();
        assert_eq!(params.year, Some(2024));
        assert_eq!(params.season, Some(Season::Fall));
        assert_eq!(params.bed_id, Some(3));
    }

    #[test]
    fn test_update_args_distinguish_clear_from_keep() {
        let args = UpdatePlantArgs {
            id: 7,
            name: None,
            variety: None,
            clear_variety: true,
            planted: None,
            season: None,
            year: None,
            quantity: None,
            space: None,
            expected_harvest: None,
            clear_expected_harvest: false,
            notes: Some("Thinned".to_string()),
            clear_notes: false,
            seed_packet: SeedPacketArgs {
                barcode: None,
                barcode_type: None,
                product_name: None,
                manufacturer: None,
            },
        };
        let params: UpdatePlant = args.into();
        assert_eq!(params.variety, Some(None));
        assert_eq!(params.expected_harvest_date, None);
        assert_eq!(params.notes, Some(Some("Thinned".to_string())));
        assert!(!params.is_empty());
    }
}
