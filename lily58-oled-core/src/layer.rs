//! Layer label text

use heapless::String;

use crate::config::{LayerConfig, LABEL_LEN};

/// Prefix of the layer label
pub const LAYER_PREFIX: &str = "LAYER: ";

/// Layer label text for an index, e.g. "LAYER: NAV"
///
/// Indices without a configured name show the unknown marker. Names that
/// do not fit the label are cut at the last whole character.
pub fn layer_text(layers: &LayerConfig, index: u8) -> String<LABEL_LEN> {
    let mut text = String::new();
    let _ = text.push_str(LAYER_PREFIX);
    for ch in layers.name(index).chars() {
        if text.push(ch).is_err() {
            break;
        }
    }
    text
}
