#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod module;
#[cfg(feature = "node-module")]
#[cfg_attr(docsrs, doc(cfg(feature = "node-module")))]
pub mod node;
pub mod program;

// If the addon is built without std, provide the lang items it needs.
#[cfg(feature = "panic-handler-abort")]
mod stubs;
