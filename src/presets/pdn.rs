//! Paint.NET palette export.
//!
//! Renders a preset's selection into a `.txt` palette file: `;`-prefixed
//! comment lines followed by one 8-hex-digit ARGB line per colour. Each
//! selected colour set contributes its dark, normal and light tones - the
//! three tones every output format can produce. Paint.NET reads at most 96
//! colours, so the list is capped there.

use crate::selection::SelectionState;
use crate::types::{PaletteCatalog, Tone};

/// Paint.NET's palette size limit.
pub const PDN_MAX_COLOURS: usize = 96;

/// Render a selection as Paint.NET palette text.
///
/// Selection entries whose colour set is unknown to the catalog (a preset
/// saved against a different document) are skipped. Pure transformation;
/// the caller owns writing the result anywhere.
pub fn pdn_palette(name: &str, selection: &SelectionState, catalog: &PaletteCatalog) -> String {
    let mut output = String::new();
    output.push_str(&format!("; mapart palette - preset '{}'\n", name));
    output.push_str("; dark, normal and light tones per selected colour set\n");

    let mut emitted = 0;
    let mut truncated = false;

    for (set_id, block_id) in selection.sorted_entries() {
        let Some(set) = catalog.get(set_id) else {
            continue;
        };

        if emitted + 3 > PDN_MAX_COLOURS {
            truncated = true;
            break;
        }

        let block_name = set
            .block(block_id)
            .map_or("unknown block", |b| b.display_name.as_str());
        output.push_str(&format!("; {} - {}\n", set.name.as_str(), block_name));

        for tone in [Tone::Dark, Tone::Normal, Tone::Light] {
            output.push_str(&set.tones.get(tone).argb_hex());
            output.push('\n');
        }
        emitted += 3;
    }

    if truncated {
        output.push_str(&format!("; truncated to {} colours\n", PDN_MAX_COLOURS));
    }

    output
}
