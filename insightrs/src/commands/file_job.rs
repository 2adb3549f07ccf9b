//! File and job commands
//!
//! File names may carry a storage prefix (`RAMDisk/`, `SDCARD/`); without
//! one the sensor uses flash memory or the configured job server. Job
//! slots are addressed by [`JobId`], which loads the file whose name starts
//! with that number.

use tracing::info;

use insightrs_core::{Command, Request};
use insightrs_types::{JobFileName, JobId, NamedTransfer, Transfer};

use crate::camera::Camera;
use crate::error::Result;

impl Camera {
    /// Load a job file and make it the active job (`LF`)
    ///
    /// The sensor must be Offline.
    pub async fn load_file(&mut self, name: &str) -> Result<()> {
        let name = JobFileName::new(name)?;
        let request = Request::new(Command::LoadFile, name.as_str())?;
        self.execute(&request).await?;
        info!("Loaded job {}", name);
        Ok(())
    }

    /// Save the active job under `name`, which must end in `.job` (`TF`)
    pub async fn store_file(&mut self, name: &str) -> Result<()> {
        let name = JobFileName::job(name)?;
        let request = Request::new(Command::StoreFile, name.as_str())?;
        self.execute(&request).await?;
        info!("Stored job as {}", name);
        Ok(())
    }

    /// Download a job file (`RF`)
    pub async fn read_file(&mut self, name: &str) -> Result<NamedTransfer> {
        let name = JobFileName::new(name)?;
        let request = Request::new(Command::ReadFile, name.as_str())?;
        self.execute(&request).await?;
        self.read_named_transfer(Command::ReadFile).await
    }

    /// Upload a job file (`WF`)
    ///
    /// The sensor must be Offline.
    pub async fn write_file(&mut self, name: &str, transfer: &Transfer) -> Result<()> {
        let name = JobFileName::new(name)?;
        let request = Request::bare(Command::WriteFile).line(name.as_str())?;
        let request = Camera::upload_request(request, transfer)?;
        self.execute(&request).await?;
        info!("Wrote {} ({} bytes)", name, transfer.size);
        Ok(())
    }

    /// Delete a `.job` or `.cxd` file (`DF`)
    pub async fn delete_file(&mut self, name: &str) -> Result<()> {
        let name = JobFileName::job_or_cxd(name)?;
        let request = Request::new(Command::DeleteFile, name.as_str())?;
        self.execute(&request).await?;
        info!("Deleted {}", name);
        Ok(())
    }

    /// File name of the active job (`GF`)
    ///
    /// The active job must have been saved.
    pub async fn get_file(&mut self) -> Result<String> {
        let line = self.query(&Request::bare(Command::GetFile)).await?;
        Ok(line.trim().to_string())
    }

    /// Load the job stored in slot `id` (`SJ`)
    pub async fn set_job(&mut self, id: JobId) -> Result<()> {
        let request = Request::new(Command::SetJob, id.to_string())?;
        self.execute(&request).await?;
        info!("Loaded job {}", id);
        Ok(())
    }

    /// Save the active job to slot `id` as `name` (`TJ`)
    pub async fn store_job(&mut self, id: JobId, name: &str) -> Result<()> {
        let request = Request::new(Command::StoreJob, format!("{id}{name}"))?;
        self.execute(&request).await?;
        info!("Stored job {}{}", id, name);
        Ok(())
    }

    /// Download the job in slot `id` (`RJ`)
    pub async fn read_job(&mut self, id: JobId) -> Result<NamedTransfer> {
        let request = Request::new(Command::ReadJob, id.to_string())?;
        self.execute(&request).await?;
        self.read_named_transfer(Command::ReadJob).await
    }

    /// Upload a job into slot `id` (`WJ`)
    pub async fn write_job(&mut self, id: JobId, name: &str, transfer: &Transfer) -> Result<()> {
        let request = Request::new(Command::WriteJob, id.to_string())?.line(name)?;
        let request = Camera::upload_request(request, transfer)?;
        self.execute(&request).await?;
        info!("Wrote job {} ({} bytes)", id, transfer.size);
        Ok(())
    }

    /// Delete the job in slot `id` (`DJ`)
    pub async fn delete_job(&mut self, id: JobId) -> Result<()> {
        let request = Request::new(Command::DeleteJob, id.to_string())?;
        self.execute(&request).await?;
        info!("Deleted job {}", id);
        Ok(())
    }

    /// Slot number of the active job (`GJ`)
    pub async fn get_job(&mut self) -> Result<JobId> {
        let line = self.query(&Request::bare(Command::GetJob)).await?;
        let result: Result<JobId> = line.trim().parse::<JobId>().map_err(|_| {
            insightrs_core::Error::malformed(Command::GetJob, format!("invalid job id {line:?}"))
                .into()
        });
        self.settle(result).await
    }

    async fn read_named_transfer(&mut self, command: Command) -> Result<NamedTransfer> {
        let (name, transfer) = self.read_transfer(command).await?;
        Ok(NamedTransfer {
            name: name.unwrap_or_default(),
            transfer,
        })
    }
}
