//! Output routing: one accepted channel and one review channel per
//! object category.
//!
//! Writing a channel truncates the previous file, so re-running a
//! conversion on unchanged input reproduces byte-identical output.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::convert::CategoryConversion;

/// Object categories with dedicated output and review channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectCategory {
    Host,
    Network,
    TcpService,
    UdpService,
}

impl ObjectCategory {
    /// File name for the accepted-output channel.
    pub fn output_file(self) -> &'static str {
        match self {
            ObjectCategory::Host => "palo_host_objects.txt",
            ObjectCategory::Network => "palo_network_objects.txt",
            ObjectCategory::TcpService => "palo_tcp_service_objects.txt",
            ObjectCategory::UdpService => "palo_udp_service_objects.txt",
        }
    }

    /// File name for the review channel.
    pub fn review_file(self) -> &'static str {
        match self {
            ObjectCategory::Host => "host_object_errors.txt",
            ObjectCategory::Network => "network_object_errors.txt",
            ObjectCategory::TcpService => "tcp_service_object_errors.txt",
            ObjectCategory::UdpService => "udp_service_object_errors.txt",
        }
    }

    fn output_banner(self) -> &'static str {
        match self {
            ObjectCategory::Host => {
                "----------------------- Converted Host Objects -----------------------"
            }
            ObjectCategory::Network => {
                "----------------------- Converted Network Objects -----------------------"
            }
            ObjectCategory::TcpService => {
                "----------------------- Converted TCP Service Objects -----------------------"
            }
            ObjectCategory::UdpService => {
                "----------------------- Converted UDP Service Objects -----------------------"
            }
        }
    }

    fn review_banner(self) -> &'static str {
        match self {
            ObjectCategory::Host => {
                "----------------------- HOST OBJECT ERRORS -----------------------"
            }
            ObjectCategory::Network => {
                "----------------------- NETWORK OBJECT ERRORS -----------------------"
            }
            ObjectCategory::TcpService => {
                "----------------------- TCP SERVICE OBJECT ERRORS -----------------------"
            }
            ObjectCategory::UdpService => {
                "----------------------- UDP SERVICE OBJECT ERRORS -----------------------"
            }
        }
    }
}

/// Errors that can occur while writing channel files.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("failed to write channel file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Where a conversion run's channel files land.
#[derive(Debug, Clone)]
pub struct ChannelLayout {
    pub output_dir: PathBuf,
    pub review_dir: PathBuf,
}

impl ChannelLayout {
    pub fn new(output_dir: PathBuf, review_dir: PathBuf) -> Self {
        Self {
            output_dir,
            review_dir,
        }
    }

    /// Write both channels for one category, truncating prior contents.
    pub fn write(
        &self,
        category: ObjectCategory,
        conversion: &CategoryConversion,
    ) -> Result<(), ChannelError> {
        ensure_dir(&self.output_dir)?;
        ensure_dir(&self.review_dir)?;

        let output_path = self.output_dir.join(category.output_file());
        write_channel(
            &output_path,
            &render_output(category.output_banner(), &conversion.directives),
        )?;

        let review_path = self.review_dir.join(category.review_file());
        write_channel(
            &review_path,
            &render_review(category.review_banner(), conversion),
        )?;

        Ok(())
    }
}

fn render_output(banner: &str, directives: &[String]) -> String {
    let mut text = String::new();
    text.push_str(banner);
    text.push_str("\n\n");
    for directive in directives {
        text.push_str(directive);
        text.push('\n');
    }
    text
}

fn render_review(banner: &str, conversion: &CategoryConversion) -> String {
    let mut text = String::new();
    text.push_str(banner);
    text.push_str("\n\n");
    for diversion in &conversion.diversions {
        text.push_str(&diversion.render());
        text.push_str("\n\n");
    }
    text
}

fn ensure_dir(dir: &Path) -> Result<(), ChannelError> {
    fs::create_dir_all(dir).map_err(|source| ChannelError::Io {
        path: dir.display().to_string(),
        source,
    })
}

fn write_channel(path: &Path, contents: &str) -> Result<(), ChannelError> {
    fs::write(path, contents).map_err(|source| ChannelError::Io {
        path: path.display().to_string(),
        source,
    })
}
