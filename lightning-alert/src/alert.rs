//! Matching assets against struck tiles.

use std::fmt;
use std::io::{self, Write};

use crate::asset::Asset;
use crate::cells::CellSet;

/// An asset whose tile was struck by lightning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert<'a> {
    pub asset_owner: &'a str,
    pub asset_name: &'a str,
}

impl<'a> Alert<'a> {
    pub fn for_asset(asset: &'a Asset) -> Self {
        Self {
            asset_owner: &asset.asset_owner,
            asset_name: &asset.asset_name,
        }
    }
}

impl fmt::Display for Alert<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lightning alert for {}:{}",
            self.asset_owner, self.asset_name
        )
    }
}

/// Lazily yield one alert per asset whose quadkey is in `cells`.
///
/// Assets are visited once, in order, with a constant-time membership probe
/// each. Duplicate assets each produce their own alert.
pub fn match_assets<'a, I>(assets: I, cells: &'a CellSet) -> impl Iterator<Item = Alert<'a>> + 'a
where
    I: IntoIterator<Item = &'a Asset>,
    I::IntoIter: 'a,
{
    assets
        .into_iter()
        .filter(move |asset| cells.contains(&asset.quad_key))
        .map(Alert::for_asset)
}

/// Write each alert on its own line. Returns the number written.
pub fn write_alerts<'a, W, I>(alerts: I, mut out: W) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Alert<'a>>,
{
    let mut written = 0;
    for alert in alerts {
        writeln!(out, "{}", alert)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
