use tabled::Table;

use crate::{types::RegionTableRow, utils};

pub fn regions() {
    let mut table_rows: Vec<RegionTableRow> = utils::REGIONS
        .iter()
        .map(|(id, name)| RegionTableRow {
            id: *id,
            region: name.to_string(),
        })
        .collect();
    table_rows.sort_by(|a, b| a.region.cmp(&b.region));

    let table = Table::new(table_rows);
    println!("{}", table);
}
