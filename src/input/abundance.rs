use std::io::BufRead;
use std::path::Path;

use tracing::{info, warn};

use crate::input::{InputError, open_maybe_gz};
use crate::model::{AbundanceTable, FeatureId};

pub fn load_abundance_table(path: &Path) -> Result<AbundanceTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let table = parse_abundance_table(reader)?;
    if table.is_empty() {
        warn!("abundance table {} has no entries", path.display());
    }
    info!("loaded {} abundance entries from {}", table.len(), path.display());
    Ok(table)
}

/// Parses a TSV with `scope`, `id` and `abundance` columns in any order.
/// Extra columns are ignored. On duplicate keys the first row wins.
pub fn parse_abundance_table<R: BufRead>(mut reader: R) -> Result<AbundanceTable, InputError> {
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse("abundance table is empty".to_string()));
    }
    let header = buf
        .trim_end()
        .split('\t')
        .map(|s| s.trim().to_ascii_lowercase())
        .collect::<Vec<_>>();
    let column = |name: &str| {
        header.iter().position(|c| c == name).ok_or_else(|| {
            InputError::Parse(format!("abundance table header lacks a {name} column"))
        })
    };
    let scope_col = column("scope")?;
    let id_col = column("id")?;
    let value_col = column("abundance")?;
    let min_fields = scope_col.max(id_col).max(value_col) + 1;

    let mut table = AbundanceTable::new();
    let mut line_no = 1usize;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields = line.split('\t').map(str::trim).collect::<Vec<_>>();
        if fields.len() < min_fields {
            return Err(InputError::Parse(format!(
                "abundance table line {line_no} has {} fields, expected at least {min_fields}",
                fields.len()
            )));
        }
        let scope = fields[scope_col];
        // Kept verbatim: "007" and "7" are distinct ids.
        let id = FeatureId::Name(fields[id_col].to_string());
        let value = fields[value_col].parse::<f64>().map_err(|_| {
            InputError::Parse(format!(
                "abundance table line {line_no}: invalid abundance {:?}",
                fields[value_col]
            ))
        })?;
        if !table.insert(scope, &id, value) {
            warn!(
                "duplicate abundance entry; keeping first (line {}, scope {}, id {})",
                line_no, scope, id
            );
        }
    }

    Ok(table)
}
