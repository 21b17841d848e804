use serde::Serialize;
use skip_core::SizeCategory;

use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryInfo {
    category: SizeCategory,
    min_size: u32,
    max_size: Option<u32>,
    preset_sizes: &'static [u32],
}

/// Shows the size category bands and the sizes each category selects.
pub fn list_categories(output_format: OutputFormat) {
    ui::header("Listing size categories");

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_categories(&SizeCategory::ALL),
        OutputFormat::Json => {
            let categories: Vec<CategoryInfo> = SizeCategory::ALL
                .iter()
                .map(|category| {
                    let band = category.band();
                    CategoryInfo {
                        category: *category,
                        min_size: band.min,
                        max_size: band.max,
                        preset_sizes: category.preset_sizes(),
                    }
                })
                .collect();
            ui::json_output(&categories);
        }
    }
}
