mod svg_util;

#[doc(inline)]
pub use svg_util::*;

use crate::entities::{Bin, NestingResult};
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws the placements of `result` on top of `bin`.
/// Rotated parts get an `(R)` suffix after their label.
pub fn result_to_svg(
    result: &NestingResult,
    bin: Bin,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let min_dim = f64::min(bin.width, bin.height);
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;

    //leave a 5% margin around the bin
    let (margin_x, margin_y) = (0.05 * bin.width, 0.05 * bin.height);
    let vbox = (
        -margin_x,
        -margin_y,
        bin.width + 2.0 * margin_x,
        bin.height + 2.0 * margin_y,
    );

    let label = {
        let label_content = format!(
            "width: {:.1} | height: {:.1} | efficiency: {:.3}% | {} | placed: {}/{} | {}",
            bin.width,
            bin.height,
            result.efficiency,
            result.algorithm,
            result.n_placed(),
            result.n_parts,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * 0.025 * min_dim)
            .set("font-size", min_dim * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let bin_group = Group::new()
        .set("id", "bin")
        .add(svg_util::rectangle(
            0.0,
            0.0,
            bin.width,
            bin.height,
            &[
                ("fill", &*format!("{}", theme.bin_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "bin, width: {:.3}, height: {:.3}",
            bin.width, bin.height
        )));

    let mut parts_group = Group::new().set("id", "parts");
    for pr in &result.placed_rects {
        let fill = theme.part_fill(&pr.label);
        let stroke = svg_util::change_brightness(fill, 0.7);
        let display_label = match pr.rotated {
            true => format!("{} (R)", pr.label),
            false => pr.label.clone(),
        };

        let mut part_group = Group::new()
            .set("id", format!("part_{}", pr.part_index))
            .add(svg_util::rectangle(
                pr.x,
                pr.y,
                pr.width,
                pr.height,
                &[
                    ("fill", &*format!("{fill}")),
                    ("fill-opacity", &*format!("{}", theme.part_fill_opac)),
                    ("stroke", &*format!("{stroke}")),
                    ("stroke-width", &*format!("{stroke_width}")),
                ],
            ))
            .add(Title::new(format!(
                "part {}: {}, x: {:.3}, y: {:.3}, width: {:.3}, height: {:.3}",
                pr.part_index, display_label, pr.x, pr.y, pr.width, pr.height
            )));

        if options.draw_labels {
            let font_size = f64::min(pr.width, pr.height) * 0.15;
            part_group = part_group.add(
                Text::new(display_label)
                    .set("x", pr.x + pr.width / 2.0)
                    .set("y", pr.y + pr.height / 2.0)
                    .set("font-size", font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("fill", format!("{}", theme.text_color)),
            );
        }
        parts_group = parts_group.add(part_group);
    }

    Document::new()
        .set("viewBox", vbox)
        .add(bin_group)
        .add(parts_group)
        .add(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Part;
    use crate::nesting::execute_nesting;

    #[test]
    fn rotated_parts_are_marked() {
        let parts = vec![
            Part::try_new("bar", 30.0, 90.0).unwrap(),
            Part::try_new("plate", 40.0, 10.0).unwrap(),
        ];
        let result = execute_nesting(&parts, 100.0, 40.0).unwrap();
        let bin = Bin::try_new(100.0, 40.0).unwrap();
        let svg = result_to_svg(&result, bin, SvgDrawOptions::default(), "test").to_string();

        assert!(svg.contains("bar (R)"));
        assert!(svg.contains("part_0"));
        assert!(svg.contains("part_1"));
        assert!(svg.contains("Skyline MWF"));
    }
}
