//! Lightning Alert - asset exposure to lightning strikes
//!
//! Reads a stream of lightning strikes and a catalog of assets, and reports
//! every asset that sits in the same map tile as at least one strike.
//!
//! Tiles are identified by Bing Maps style quadkeys at zoom level
//! [`coord::ZOOM_LEVEL`]. Strikes are reduced to a [`cells::CellSet`] of
//! distinct quadkeys, then each asset's precomputed quadkey is looked up in
//! that set.
//!
//! # High-Level API
//!
//! ```ignore
//! use lightning_alert::alerter::Alerter;
//!
//! let summary = Alerter::default().run("assets.json", "lightning.json", std::io::stdout())?;
//! ```
//!
//! # Building Blocks
//!
//! ```
//! use lightning_alert::alert::match_assets;
//! use lightning_alert::asset::Asset;
//! use lightning_alert::event::collect_quadkeys;
//!
//! let events = r#"{"flashType":1,"latitude":33.5524951,"longitude":-94.5822016}"#;
//! let cells = collect_quadkeys(events.as_bytes()).unwrap();
//!
//! let assets = vec![Asset::new("Dante Street", "6720", "023113203031")];
//! let alerts: Vec<String> = match_assets(&assets, &cells).map(|a| a.to_string()).collect();
//! assert_eq!(alerts, vec!["lightning alert for 6720:Dante Street"]);
//! ```

pub mod alert;
pub mod alerter;
pub mod asset;
pub mod cells;
pub mod config;
pub mod coord;
pub mod event;
pub mod logging;

/// Version of the library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
