//! osu! beatmap decoder.
//!
//! The [`osu`] module reads `.osu` files of format version 14 into a [`osu::model::Beatmap`]:
//! metadata, difficulty, timing points, events and hit objects, with every string copied out of
//! the source.
//!
//! ```rust
//! use osu_rs::osu::prelude::*;
//!
//! let source = "osu file format v14\n\n[Difficulty]\nCircleSize:4\n";
//! let OsuOutput { beatmap, warnings } = parse_osu(source).unwrap();
//! assert_eq!(beatmap.difficulty.circle_size, Some(Decimal::from(4u64)));
//! assert!(warnings.is_empty());
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for the model, errors and warnings.
//! - `diagnostics`: renders errors and warnings with `ariadne`, see the `osu::diagnostics` module.

pub mod osu;
