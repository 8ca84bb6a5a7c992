//! Static choropleth assembly as an SVG document.
//!
//! Equirectangular projection of the feature polygons into a fixed
//! viewport, fills driven by the normalized value, plus an inset
//! semi-transparent colorbar and an optional title.

use std::fmt::Write as _;

use geojson::Value;

use choro_geometry::WorldAtlas;
use choro_model::ValueRange;

use crate::color::{ColorMap, MISSING_COLOR};
use crate::merge::Merged;

/// Rendering options for the static map.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub width: u32,
    pub height: u32,
    pub colormap: ColorMap,
    /// Title template; `{value_col}` is substituted with the value label.
    pub title: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 2100,
            height: 1200,
            colormap: ColorMap::default(),
            title: None,
        }
    }
}

struct Projector {
    width: f64,
    height: f64,
}

impl Projector {
    fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let x = (lon + 180.0) / 360.0 * self.width;
        let y = (90.0 - lat) / 180.0 * self.height;
        (x, y)
    }
}

fn ring_to_path(projector: &Projector, ring: &[Vec<f64>], path: &mut String) {
    for (index, position) in ring.iter().enumerate() {
        let (Some(lon), Some(lat)) = (position.first(), position.get(1)) else {
            continue;
        };
        let (x, y) = projector.project(*lon, *lat);
        let command = if index == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{command}{x:.1},{y:.1}");
    }
    path.push('Z');
}

fn geometry_to_path(projector: &Projector, value: &Value) -> String {
    let mut path = String::new();
    match value {
        Value::Polygon(rings) => {
            for ring in rings {
                ring_to_path(projector, ring, &mut path);
            }
        }
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                for ring in rings {
                    ring_to_path(projector, ring, &mut path);
                }
            }
        }
        _ => {}
    }
    path
}

fn colorbar(svg: &mut String, options: &SvgOptions, range: ValueRange) {
    let bar_width = f64::from(options.width) * 0.25;
    let bar_height = f64::from(options.height) * 0.025;
    let x0 = (f64::from(options.width) - bar_width) / 2.0;
    let y0 = f64::from(options.height) - bar_height * 2.0;
    let steps = 48;
    let step_width = bar_width / steps as f64;
    for step in 0..steps {
        let t = step as f64 / (steps - 1) as f64;
        let color = options.colormap.sample(t);
        let x = x0 + step as f64 * step_width;
        let _ = write!(
            svg,
            "<rect x=\"{x:.1}\" y=\"{y0:.1}\" width=\"{w:.2}\" height=\"{bar_height:.1}\" fill=\"{fill}\" fill-opacity=\"0.85\"/>",
            w = step_width + 0.5,
            fill = color.to_hex(),
        );
    }
    let label_y = y0 - 6.0;
    let font = bar_height * 0.9;
    let _ = write!(
        svg,
        "<text x=\"{x0:.1}\" y=\"{label_y:.1}\" font-size=\"{font:.1}\" font-family=\"sans-serif\" fill=\"#333\">{min:.4}</text>",
        min = range.min,
    );
    let _ = write!(
        svg,
        "<text x=\"{x:.1}\" y=\"{label_y:.1}\" font-size=\"{font:.1}\" font-family=\"sans-serif\" fill=\"#333\" text-anchor=\"end\">{max:.4}</text>",
        x = x0 + bar_width,
        max = range.max,
    );
}

/// Builds the full SVG document for a merged dataset.
///
/// Every feature is drawn exactly once; missing values (and features with
/// no code) get the flat missing fill. When the range is undefined the
/// colorbar is omitted entirely.
pub fn render_svg(world: &WorldAtlas, merged: &Merged, value_label: &str, options: &SvgOptions) -> String {
    let projector = Projector {
        width: f64::from(options.width),
        height: f64::from(options.height),
    };
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = options.width,
        h = options.height,
    );
    let _ = write!(
        svg,
        "<rect width=\"{w}\" height=\"{h}\" fill=\"#ffffff\"/>",
        w = options.width,
        h = options.height,
    );

    for (feature, value) in world.features.iter().zip(&merged.per_feature) {
        let fill = match (value, merged.range) {
            (Some(v), Some(range)) => options.colormap.sample(range.normalize(*v)).to_hex(),
            _ => MISSING_COLOR.to_hex(),
        };
        let path = geometry_to_path(&projector, &feature.geometry.value);
        if path.is_empty() {
            continue;
        }
        let _ = write!(
            svg,
            "<path d=\"{path}\" fill=\"{fill}\" stroke=\"#999999\" stroke-width=\"0.4\"/>",
        );
    }

    if let Some(template) = &options.title {
        let title = template.replace("{value_col}", value_label);
        if !title.is_empty() {
            let _ = write!(
                svg,
                "<text x=\"{x}\" y=\"{y}\" font-size=\"{size}\" font-family=\"sans-serif\" fill=\"#222\" text-anchor=\"middle\">{title}</text>",
                x = options.width / 2,
                y = options.height / 18,
                size = options.height / 24,
                title = xml_escape(&title),
            );
        }
    }

    if let Some(range) = merged.range {
        colorbar(&mut svg, options, range);
    }
    svg.push_str("</svg>");
    svg
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use choro_model::MetricMap;
    use choro_model::Iso3;

    use crate::merge::merge;

    use super::*;

    fn world() -> WorldAtlas {
        WorldAtlas::from_geojson(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {"ADMIN": "France", "ISO_A3": "FRA"},
                        "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,0]]]}
                    },
                    {
                        "type": "Feature",
                        "properties": {"ADMIN": "Germany", "ISO_A3": "DEU"},
                        "geometry": {"type": "MultiPolygon", "coordinates": [[[[20,20],[30,20],[30,30],[20,20]]]]}
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn draws_one_path_per_feature() {
        let metric: MetricMap = [(Iso3::parse("FRA").unwrap(), Some(1.0))]
            .into_iter()
            .collect();
        let world = world();
        let merged = merge(&metric, &world);
        let svg = render_svg(&world, &merged, "value", &SvgOptions::default());
        assert_eq!(svg.matches("<path ").count(), 2);
        // Germany has no value, so the missing fill appears.
        assert!(svg.contains(MISSING_COLOR.to_hex().as_str()));
    }

    #[test]
    fn undefined_range_renders_flat_missing_fill_without_colorbar() {
        let world = world();
        let merged = merge(&MetricMap::new(), &world);
        let svg = render_svg(&world, &merged, "value", &SvgOptions::default());
        assert_eq!(svg.matches("<rect ").count(), 1); // just the background
        assert_eq!(svg.matches(&MISSING_COLOR.to_hex()).count(), 2);
    }

    #[test]
    fn title_template_substitutes_value_label() {
        let world = world();
        let merged = merge(&MetricMap::new(), &world);
        let options = SvgOptions {
            title: Some("Track length ({value_col})".to_string()),
            ..SvgOptions::default()
        };
        let svg = render_svg(&world, &merged, "km", &options);
        assert!(svg.contains("Track length (km)"));
    }
}
