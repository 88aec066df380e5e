use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Style knobs for the whole render pass, loadable from JSON so map styles
/// can be authored without a rebuild
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// heights above the road surface
    pub mark_y: f32,
    pub curb_y: f32,
    pub sidewalk_y: f32,

    pub line_w: f32,
    pub dash_len: f32,
    pub dash_gap: f32,
    /// edge lines are pulled in from the curb face by this much
    pub edge_inset: f32,

    pub curb_h: f32,
    pub curb_t: f32,
    pub sidewalk_width: f32,
    /// tessellation factor for ring sectors
    pub arc_segs: u32,

    pub curb_color: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            mark_y: 0.02,
            curb_y: 0.1,
            sidewalk_y: 0.15,
            line_w: 0.15,
            dash_len: 3.0,
            dash_gap: 2.0,
            edge_inset: 0.3,
            curb_h: 0.2,
            curb_t: 0.3,
            sidewalk_width: 3.0,
            arc_segs: 12,
            curb_color: 0x9a9a9a,
        }
    }
}

impl RenderParams {
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let f = File::open(path)?;
        serde_json::from_reader(BufReader::new(f)).map_err(Into::into)
    }
}
