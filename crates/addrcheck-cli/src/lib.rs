//! addrcheck-cli
//! =============
//!
//! Command-line interface for the `addrcheck-core` address heuristics.
//!
//! This crate primarily provides a binary (`addrcheck`). The small library
//! target only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! addrcheck plausible "175-4 Street, Asmara, Maekel Region, Eritrea"
//! addrcheck validate "9, Beleza Street, Asmara, Eritrea" Eritrea
//! addrcheck score "9, Beleza Street, Asmara, Eritrea" --results saved.json
//! ```
//!
//! For programmatic access use the [`addrcheck-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
