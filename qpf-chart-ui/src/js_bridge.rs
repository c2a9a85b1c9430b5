//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The grouped bar chart is a D3.js function kept in `assets/js/` and loaded
//! at runtime as a global (no ES modules), exposed via `window.*`. This
//! module provides safe Rust wrappers that serialize data and call those
//! globals, and [`ChartHandle`], which scopes the lifetime of the one live
//! chart instance to a Rust value.

// Embed the D3 chart JS at compile time
static GROUPED_BAR_CHART_JS: &str = include_str!("../assets/js/grouped-bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('QPF JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON string for embedding inside a single-quoted JS literal.
pub fn escape_for_js(json: &str) -> String {
    json.replace('\'', "\\'").replace('\n', "")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS defines functions via `function` declarations. To ensure
/// they become globally accessible (not block-scoped inside the setInterval
/// callback), they are evaluated at global scope via indirect `eval()` once
/// D3 is ready, and then explicitly promoted to `window.*`.
pub fn init_charts() {
    // Store the script on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__qpfChartScripts = {};",
        serde_json::to_string(GROUPED_BAR_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__qpfChartsReady) { return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__qpfChartScripts);
                    delete window.__qpfChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderGroupedBarChart !== 'undefined') window.renderGroupedBarChart = renderGroupedBarChart;
                    window.__qpfChartsReady = true;
                    console.log('QPF charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the grouped OHLC bar chart into the given container.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
fn render_grouped_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_for_js(data_json);
    let escaped_config = escape_for_js(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__qpfChartsReady &&
                    typeof window.renderGroupedBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderGroupedBarChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[QPF] renderGroupedBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Clean up whatever is rendered in the given container.
fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Owned handle to the single live chart instance.
///
/// [`ChartHandle::render`] clears the target container before drawing, and
/// dropping the handle clears it again, so holding at most one handle (in a
/// signal) guarantees at most one live chart: installing a replacement or
/// setting the signal to `None` disposes the predecessor.
pub struct ChartHandle {
    container_id: String,
}

impl ChartHandle {
    /// Dispose anything currently in `container_id` and render a fresh
    /// grouped bar chart there, taking ownership of the container.
    pub fn render(container_id: &str, data_json: &str, config_json: &str) -> Self {
        log::info!("chart: rendering into '{container_id}'");
        destroy_chart(container_id);
        render_grouped_bar_chart(container_id, data_json, config_json);
        ChartHandle {
            container_id: container_id.to_string(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        destroy_chart(&self.container_id);
    }
}
