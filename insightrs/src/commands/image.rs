//! Image commands
//!
//! Images travel as raw BMP bytes. Decoding them is left to the caller.

use tracing::info;

use insightrs_core::{Command, Request};
use insightrs_types::Transfer;

use crate::camera::Camera;
use crate::error::Result;

impl Camera {
    /// Current image as a BMP file (`RB`)
    pub async fn read_bmp(&mut self) -> Result<Transfer> {
        self.read_image_with(Command::ReadBmp).await
    }

    /// Current image in the sensor's native format (`RI`)
    pub async fn read_image(&mut self) -> Result<Transfer> {
        self.read_image_with(Command::ReadImage).await
    }

    /// Send a BMP image to the sensor (`WB`)
    pub async fn write_bmp(&mut self, image: &Transfer) -> Result<()> {
        self.write_image_with(Command::WriteBmp, image).await
    }

    /// Send an image to the sensor (`WI`)
    pub async fn write_image(&mut self, image: &Transfer) -> Result<()> {
        self.write_image_with(Command::WriteImage, image).await
    }

    async fn read_image_with(&mut self, command: Command) -> Result<Transfer> {
        self.execute(&Request::bare(command)).await?;
        let (_, image) = self.read_transfer(command).await?;
        info!("{} received {} bytes", command, image.size);
        Ok(image)
    }

    async fn write_image_with(&mut self, command: Command, image: &Transfer) -> Result<()> {
        let request = Camera::upload_request(Request::bare(command), image)?;
        self.execute(&request).await?;
        info!("{} sent {} bytes", command, image.size);
        Ok(())
    }
}
