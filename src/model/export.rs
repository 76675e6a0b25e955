//! Data models for the export dialog
//!
//! The export format selects which option set is shown; both option sets
//! exist at the same time so switching tabs never loses the other tab's
//! choices. Confirming collapses the pair into an `ExportRequest`.

use serde::{Deserialize, Serialize};

/// The mutually exclusive choice of output packaging style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Static HTML & CSS bundle
    #[default]
    HtmlCss,
    /// Framework project scaffold (Next.js)
    FrameworkProject,
}

impl ExportFormat {
    pub fn all() -> [ExportFormat; 2] {
        [ExportFormat::HtmlCss, ExportFormat::FrameworkProject]
    }

    /// Tab title shown in the format picker
    pub fn tab_title(&self) -> &'static str {
        match self {
            ExportFormat::HtmlCss => "HTML & CSS",
            ExportFormat::FrameworkProject => "Next.js",
        }
    }

    /// Section header above the option list
    pub fn export_label(&self) -> &'static str {
        match self {
            ExportFormat::HtmlCss => "Export as HTML & CSS",
            ExportFormat::FrameworkProject => "Export as Next.js Project",
        }
    }

    /// Footer button label
    pub fn download_label(&self) -> &'static str {
        match self {
            ExportFormat::HtmlCss => "Download HTML & CSS Project",
            ExportFormat::FrameworkProject => "Download Next.js Project",
        }
    }

    /// Shortcut key for quick tab access
    pub fn shortcut(&self) -> char {
        match self {
            ExportFormat::HtmlCss => '1',
            ExportFormat::FrameworkProject => '2',
        }
    }
}

/// Options for the HTML & CSS export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlExportOptions {
    /// Bundle images, styles, fonts, etc. alongside the markup
    pub include_assets: bool,
    /// Carry user-authored custom code into the output
    pub include_custom_code: bool,
}

impl Default for HtmlExportOptions {
    fn default() -> Self {
        Self {
            include_assets: true,
            include_custom_code: true,
        }
    }
}

impl HtmlExportOptions {
    pub const LABELS: [&'static str; 2] = [
        "Include assets (images, styles, fonts, etc.)",
        "Include custom code",
    ];

    pub fn flag(&self, index: usize) -> bool {
        match index {
            0 => self.include_assets,
            1 => self.include_custom_code,
            _ => false,
        }
    }

    pub fn toggle(&mut self, index: usize) {
        match index {
            0 => self.include_assets = !self.include_assets,
            1 => self.include_custom_code = !self.include_custom_code,
            _ => {}
        }
    }
}

/// Options for the framework project export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkExportOptions {
    /// Use the modern `app` directory layout (Next.js v13+)
    pub use_app_directory: bool,
    /// Download assets into the project instead of referencing remote URLs
    pub include_assets_locally: bool,
    /// Carry user-authored custom code into the output
    pub include_custom_code: bool,
}

impl Default for FrameworkExportOptions {
    fn default() -> Self {
        Self {
            use_app_directory: true,
            include_assets_locally: true,
            include_custom_code: true,
        }
    }
}

impl FrameworkExportOptions {
    pub const LABELS: [&'static str; 3] = [
        "Use `app` directory (Next.js v13+)",
        "Include assets locally (images, styles, fonts, etc.)",
        "Include custom code",
    ];

    pub fn flag(&self, index: usize) -> bool {
        match index {
            0 => self.use_app_directory,
            1 => self.include_assets_locally,
            2 => self.include_custom_code,
            _ => false,
        }
    }

    pub fn toggle(&mut self, index: usize) {
        match index {
            0 => self.use_app_directory = !self.use_app_directory,
            1 => self.include_assets_locally = !self.include_assets_locally,
            2 => self.include_custom_code = !self.include_custom_code,
            _ => {}
        }
    }
}

/// The option set for one export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportOptions {
    HtmlCss(HtmlExportOptions),
    Framework(FrameworkExportOptions),
}

impl ExportOptions {
    /// The format this option set belongs to
    pub fn format(&self) -> ExportFormat {
        match self {
            ExportOptions::HtmlCss(_) => ExportFormat::HtmlCss,
            ExportOptions::Framework(_) => ExportFormat::FrameworkProject,
        }
    }
}

/// What the user asked for: the payload a future packaging service would
/// receive. This core only records and displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub options: ExportOptions,
}

impl ExportRequest {
    /// One-line summary for the status bar
    pub fn summary(&self) -> String {
        let (enabled, total) = match self.options {
            ExportOptions::HtmlCss(opts) => {
                let total = HtmlExportOptions::LABELS.len();
                ((0..total).filter(|i| opts.flag(*i)).count(), total)
            }
            ExportOptions::Framework(opts) => {
                let total = FrameworkExportOptions::LABELS.len();
                ((0..total).filter(|i| opts.flag(*i)).count(), total)
            }
        };

        format!(
            "{} ({}/{} options enabled)",
            self.format.tab_title(),
            enabled,
            total
        )
    }
}
