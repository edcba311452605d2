use anyhow::Context;
use matcut_engine::logging::{init_logging, LoggingConfig};
use matcut_engine::{EditableWindowKey, LayoutOptions, MatDesignerState, MatLayout, Unit};

/// Display pixels per mat unit for the printed layout.
const SCALE: f64 = 2.0;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let state = sample_design().context("building sample design")?;
    state.validate().context("sample design is not valid")?;

    let layout = MatLayout::compute(&state, &LayoutOptions::with_scale(SCALE))?;
    log::info!(
        "{} windows, {} extra dimensions on a {}x{} {} mat",
        layout.windows.len(),
        layout.extras.len(),
        state.mat_width,
        state.mat_height,
        state.unit,
    );

    for p in &layout.windows {
        log::debug!(
            "window {} `{}` at ({}, {}) size {}x{}",
            p.window.id,
            p.window.name,
            p.scaled_x,
            p.scaled_y,
            p.scaled_width,
            p.scaled_height,
        );
    }

    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

/// 16x20 in mat with a large portrait over two small landscapes.
fn sample_design() -> anyhow::Result<MatDesignerState> {
    let mut state = MatDesignerState::new(16.0, 20.0, Unit::Inch);
    let portrait = state.add_window("Portrait", 3.0, 2.5, 10.0, 9.0)?;
    let left = state.add_window("Left", 2.0, 13.5, 5.5, 4.0)?;
    state.add_window("Right", 8.5, 13.5, 5.5, 4.0)?;

    state.set_window_field(portrait, EditableWindowKey::Name, "Family portrait")?;
    state.set_window_field(left, "x".parse()?, "2.5")?;
    state.select(portrait)?;
    Ok(state)
}
