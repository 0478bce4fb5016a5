use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::adapters::pixel_format::pixels_to_rgb;
use crate::controllers::ports::frame_publisher::FramePublisher;
use crate::core::data::frame_buffer::FrameBuffer;

#[derive(Debug, Error)]
pub enum PpmError {
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes `frame` as binary PPM (P6): header, then RGB triples row by row.
/// The reserved byte of each pixel is dropped.
pub fn write_ppm<W: Write>(frame: &FrameBuffer, writer: &mut W) -> std::io::Result<()> {
    // P6 means binary RGB, then width, height and max_colour
    write!(writer, "P6\n{} {}\n255\n", frame.width(), frame.height())?;

    for row in frame.rows() {
        writer.write_all(&pixels_to_rgb(row))?;
    }

    Ok(())
}

/// Publishes each frame to the same PPM file, creating parent directories
/// as needed.
#[derive(Debug, Clone)]
pub struct PpmFilePresenter {
    path: PathBuf,
}

impl PpmFilePresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> PpmError {
        PpmError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl FramePublisher for PpmFilePresenter {
    type Error = PpmError;

    fn publish_frame(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| PpmError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(&self.path).map_err(|e| self.write_error(e))?;
        let mut writer = BufWriter::new(file);

        write_ppm(frame, &mut writer).map_err(|e| self.write_error(e))?;
        writer.flush().map_err(|e| self.write_error(e))?;

        info!(
            path = %self.path.display(),
            width = frame.width(),
            height = frame.height(),
            "frame written"
        );

        Ok(())
    }
}
