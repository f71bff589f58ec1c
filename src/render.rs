use anyhow::anyhow;
use eframe::egui;

use crate::app::FigureApp;
use crate::figure::Figure;

/// Turns a finished [`Figure`] into something the user can see.
pub trait Renderer {
    fn render(&self, figure: &Figure) -> anyhow::Result<()>;
}

// ---------------------------------------------------------------------------
// Native window
// ---------------------------------------------------------------------------

/// Shows the figure in a native window and blocks until it is closed.
#[derive(Debug, Clone)]
pub struct WindowRenderer {
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for WindowRenderer {
    fn default() -> Self {
        Self {
            inner_size: [1000.0, 700.0],
            min_inner_size: [500.0, 350.0],
        }
    }
}

impl Renderer for WindowRenderer {
    fn render(&self, figure: &Figure) -> anyhow::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(figure.title.as_str())
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size),
            ..Default::default()
        };

        log::info!("Opening plot window \"{}\"", figure.title);
        let title = figure.title.clone();
        let figure = figure.clone();
        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(FigureApp::new(figure)))),
        )
        .map_err(|e| anyhow!("plot window failed: {e}"))?;

        log::debug!("Plot window closed");
        Ok(())
    }
}
