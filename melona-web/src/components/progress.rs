//! Collection progress readout and bar.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub revealed: usize,
    pub total: usize,
}

#[allow(clippy::cast_precision_loss)]
fn fill_pct(revealed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        revealed as f64 / total as f64 * 100.0
    }
}

#[function_component(ProgressBar)]
pub fn progress_bar(p: &Props) -> Html {
    let pct = fill_pct(p.revealed, p.total);
    let complete = p.total > 0 && p.revealed == p.total;

    html! {
        <div class="progress">
            <span class={classes!("progress__check", complete.then_some("progress__check--complete"))} aria-hidden="true">
                { "✔" }
            </span>
            <span class="progress__count">
                { format!("{} de {} completadas", p.revealed, p.total) }
            </span>
            <div class="progress__track" role="progressbar"
                aria-valuemin="0"
                aria-valuemax={p.total.to_string()}
                aria-valuenow={p.revealed.to_string()}
            >
                <div class="progress__fill" style={format!("width:{pct:.0}%")} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(revealed: usize, total: usize) -> String {
        let props = Props { revealed, total };
        block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render())
    }

    #[test]
    fn renders_count_and_fill_width() {
        let html = render(3, 12);
        assert!(html.contains("3 de 12 completadas"));
        assert!(html.contains("width:25%"));
        assert!(!html.contains("progress__check--complete"));
    }

    #[test]
    fn completion_highlights_the_check() {
        let html = render(12, 12);
        assert!(html.contains("width:100%"));
        assert!(html.contains("progress__check--complete"));
    }

    #[test]
    fn empty_catalog_renders_a_zero_bar() {
        let html = render(0, 0);
        assert!(html.contains("0 de 0 completadas"));
        assert!(html.contains("width:0%"));
    }
}
