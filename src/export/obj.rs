use crate::engines::spatial::{LatticePos, Segment};

/// Renders segments as an OBJ line mesh: paired `v` lines followed by
/// 1-based `l` lines. Write-only debug/visualization output, not a stable
/// format.
pub fn segments_as_obj(segments: &[Segment], precision: u32) -> String {
    let mut vertices = Vec::with_capacity(segments.len() * 2);
    let mut lines = Vec::with_capacity(segments.len());
    for segment in segments {
        let from = segment.from.to_point(precision);
        let to = segment.to.to_point(precision);
        vertices.push(format!("v {} {} {}", from.x, from.y, from.z));
        vertices.push(format!("v {} {} {}", to.x, to.y, to.z));
        lines.push(format!("l {} {}", vertices.len() - 1, vertices.len()));
    }
    format!("{}\n{}\n", vertices.join("\n"), lines.join("\n"))
}

/// Renders seed positions as OBJ vertices.
pub fn seeds_as_obj(seeds: &[LatticePos], precision: u32) -> String {
    let mut vertices = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let point = seed.to_point(precision);
        vertices.push(format!("v {} {} {}", point.x, point.y, point.z));
    }
    format!("{}\n", vertices.join("\n"))
}
