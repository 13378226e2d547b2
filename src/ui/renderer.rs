//! Top-level rendering coordinator.
//!
//! Rendering is a three-step process:
//!
//! 1. **Layout**: record the pane size and compute the frame geometry, which
//!    also tells the outside-click detector where the container is
//! 2. **View Model Computation**: transform `AppState` into `UIViewModel`
//! 3. **Component Rendering**: delegate to the component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout::WidgetLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the widget to stdout for a `rows` x `cols` pane.
///
/// Takes the state mutably because the frame's geometry is remembered for
/// pointer hit testing.
pub fn render(state: &mut AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let layout = state.sync_layout(rows, cols);
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, &layout, &state.theme);
}

fn render_viewmodel(vm: &UIViewModel, layout: &WidgetLayout, theme: &Theme) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(empty, theme, layout.cols);
        return;
    }

    components::render_widget(vm, layout, theme);
}
