use std::path::Path;

use console::Style;
use panview_core::view::CropRect;
use panview_core::ViewerStatus;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_render_summary(
    input: &Path,
    output: &Path,
    status: &ViewerStatus,
    crop: Option<CropRect>,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Panview Render"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(input.display()));
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Filter"),
        s.method.apply_to(status.quality)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("x{:.2}", status.scale))
    );

    if let (Some((w, h)), Some((rw, rh))) = (status.source, status.resampled) {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Source"),
            s.value.apply_to(format!("{w}x{h}"))
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("Scaled"),
            s.value.apply_to(format!("{rw}x{rh}"))
        );
    }

    match crop {
        Some(c) => println!(
            "  {:<14}{}",
            s.label.apply_to("Crop"),
            s.value.apply_to(format!(
                "({}, {}) - ({}, {})  {}x{}",
                c.left,
                c.top,
                c.right,
                c.bottom,
                c.width(),
                c.height()
            ))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Crop"),
            s.disabled.apply_to("nothing visible")
        ),
    }
    println!();
}
