//! Settings and cell value commands

use tracing::{debug, info};

use insightrs_core::{Command, Request};
use insightrs_types::{CellAddress, IpLock, Region, SystemInfo, Transfer, ValueTarget, WireFloat};

use crate::camera::Camera;
use crate::error::Result;

impl Camera {
    /// Value of a cell or symbolic tag (`GV`)
    ///
    /// Returned as the sensor formats it; numbers are not parsed.
    pub async fn get_value(&mut self, target: &ValueTarget) -> Result<String> {
        let request = Request::new(Command::GetValue, target.address())?;
        let value = self.query(&request).await?;
        debug!("{} = {:?}", target, value);
        Ok(value)
    }

    /// Set an integer control (EditInt, CheckBox, ListBox...) (`SI`)
    pub async fn set_integer(&mut self, target: &ValueTarget, value: i64) -> Result<()> {
        let request = Request::new(Command::SetInteger, target.with_value(value))?;
        self.execute(&request).await
    }

    /// Set an EditFloat control (`SF`)
    pub async fn set_float(&mut self, target: &ValueTarget, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(insightrs_core::Error::InvalidArgument(format!(
                "Float value must be finite, got {value}"
            ))
            .into());
        }

        let request = Request::new(Command::SetFloat, target.with_value(WireFloat(value)))?;
        self.execute(&request).await
    }

    /// Set an EditRegion control (`SR`)
    pub async fn set_region(&mut self, target: &ValueTarget, region: &Region) -> Result<()> {
        region.validate()?;
        let request = Request::new(Command::SetRegion, target.with_value(region))?;
        self.execute(&request).await
    }

    /// Set an EditString control (`SS`)
    ///
    /// Only spreadsheet cells are addressable.
    pub async fn set_string(&mut self, cell: CellAddress, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(insightrs_types::Error::Validation(
                "The string value cannot be an empty string".into(),
            )
            .into());
        }

        let request = Request::new(Command::SetString, format!("{cell}{text}"))?;
        self.execute(&request).await
    }

    /// System information (`GI`)
    pub async fn get_info(&mut self) -> Result<SystemInfo> {
        self.execute(&Request::bare(Command::GetInfo)).await?;
        let lines = self.read_trailing_lines().await?;
        Ok(SystemInfo::from_lines(lines))
    }

    /// System settings, the contents of `proc.set` (`RS`)
    pub async fn read_settings(&mut self) -> Result<Transfer> {
        self.execute(&Request::bare(Command::ReadSettings)).await?;
        let (_, settings) = self.read_transfer(Command::ReadSettings).await?;
        Ok(settings)
    }

    /// Replace the system settings (`WS`)
    ///
    /// Takes effect after [`store_settings`](Camera::store_settings) and a
    /// reboot.
    pub async fn write_settings(&mut self, settings: &Transfer) -> Result<()> {
        let request = Camera::upload_request(Request::bare(Command::WriteSettings), settings)?;
        self.execute(&request).await?;
        info!("Wrote {} bytes of settings", settings.size);
        Ok(())
    }

    /// Save the current settings to flash (`TS`)
    ///
    /// The sensor must be Offline.
    pub async fn store_settings(&mut self) -> Result<()> {
        self.execute(&Request::bare(Command::StoreSettings)).await?;
        info!("Settings stored");
        Ok(())
    }

    /// Lock or unlock the IP address (`SL`)
    pub async fn set_ip_lock(&mut self, lock: IpLock) -> Result<()> {
        let request = Request::new(Command::SetIpLock, lock.as_wire().to_string())?;
        self.execute(&request).await
    }

    /// IP address lock state (`GL`)
    pub async fn get_ip_lock(&mut self) -> Result<IpLock> {
        self.read_flag(Command::GetIpLock, IpLock::from_wire).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::{self, Step};
    use insightrs_core::Status;
    use insightrs_types::Checksum;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_get_value() {
        let (mut camera, server) = testing::connected_camera(vec![
            Step::reply(&["GVA005"], "1\r\n42.5\r\n"),
            Step::reply(&["GVPattern_1.Pass"], "1\r\n1\r\n"),
            Step::reply(&["GVZ399"], "-1\r\n"),
        ])
        .await;

        let cell = ValueTarget::cell('a', 5).unwrap();
        assert_eq!(camera.get_value(&cell).await.unwrap(), "42.5");

        let tag = ValueTarget::tag("Pattern_1.Pass").unwrap();
        assert_eq!(camera.get_value(&tag).await.unwrap(), "1");

        let err = camera
            .get_value(&ValueTarget::cell('Z', 399).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(Status::InvalidArgument));

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_set_integer() {
        let (mut camera, server) = testing::connected_camera(vec![
            Step::reply(&["SID01953"], "1\r\n"),
            Step::reply(&["SIThreshold -7"], "1\r\n"),
        ])
        .await;

        camera
            .set_integer(&ValueTarget::cell('D', 19).unwrap(), 53)
            .await
            .unwrap();
        camera
            .set_integer(&ValueTarget::tag("Threshold").unwrap(), -7)
            .await
            .unwrap();

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_set_float() {
        let (mut camera, server) = testing::connected_camera(vec![
            Step::reply(&["SFB0102.0"], "1\r\n"),
            Step::reply(&["SFGain 0.25"], "-2\r\n"),
            Step::reply(&["SFGain 10000000000000000.0"], "1\r\n"),
            Step::reply(&["SFGain 0.0000001"], "1\r\n"),
        ])
        .await;

        camera
            .set_float(&ValueTarget::cell('B', 10).unwrap(), 2.0)
            .await
            .unwrap();

        let err = camera
            .set_float(&ValueTarget::tag("Gain").unwrap(), 0.25)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("EditFloat"));

        let gain = ValueTarget::tag("Gain").unwrap();
        camera.set_float(&gain, 1e16).await.unwrap();
        camera.set_float(&gain, 1e-7).await.unwrap();

        let err = camera
            .set_float(&ValueTarget::tag("Gain").unwrap(), f64::NAN)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Core(insightrs_core::Error::InvalidArgument(_))));

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_set_region() {
        let (mut camera, server) = testing::connected_camera(vec![
            Step::reply(&["SRC0073.0 4.5 100.0 200.0 0.0 0.0"], "1\r\n"),
            Step::reply(&["SRRoi 1.0 2.0 3.0 4.0 90.0 0.5"], "1\r\n"),
        ])
        .await;

        camera
            .set_region(
                &ValueTarget::cell('C', 7).unwrap(),
                &Region::new(3.0, 4.5, 100.0, 200.0, 0.0, 0.0),
            )
            .await
            .unwrap();
        camera
            .set_region(
                &ValueTarget::tag("Roi").unwrap(),
                &Region::new(1.0, 2.0, 3.0, 4.0, 90.0, 0.5),
            )
            .await
            .unwrap();

        let err = camera
            .set_region(
                &ValueTarget::tag("Roi").unwrap(),
                &Region::new(f64::INFINITY, 2.0, 3.0, 4.0, 90.0, 0.5),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Types(_)));

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_set_string() {
        let (mut camera, server) =
            testing::connected_camera(vec![Step::reply(&["SSA010Lot 7"], "1\r\n")]).await;

        let cell = CellAddress::new('A', 10).unwrap();
        camera.set_string(cell, "Lot 7").await.unwrap();

        assert!(matches!(camera.set_string(cell, "").await, Err(Error::Types(_))));
        assert!(matches!(
            camera.set_string(cell, "a\nb").await,
            Err(Error::Core(insightrs_core::Error::InvalidArgument(_)))
        ));

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_get_info() {
        let (mut camera, server) = testing::connected_camera(vec![Step::reply(
            &["GI"],
            "1\r\nModel: IS7802M\r\nFirmware: 5.7.1\r\nSerial Number: 1A2B3C\r\n",
        )])
        .await;

        let info = camera.get_info().await.unwrap();
        assert_eq!(info.len(), 3);
        assert_eq!(info.get("model"), Some("IS7802M"));
        assert_eq!(info.get("Serial Number"), Some("1A2B3C"));

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_settings_transfer() {
        let (mut camera, server) = testing::connected_camera(vec![
            Step::reply(&["RS"], "1\r\n3\r\n0A0B0C\r\nC0DE\r\n"),
            Step::reply(&["WS", "3", "0A0B0C", "C0DE"], "1\r\n"),
            Step::reply(&["TS"], "-2\r\n"),
        ])
        .await;

        let settings = camera.read_settings().await.unwrap();
        assert_eq!(
            settings,
            Transfer::new(vec![0x0A, 0x0B, 0x0C], Checksum::parse("C0DE").unwrap())
        );

        camera.write_settings(&settings).await.unwrap();

        let err = camera.store_settings().await.unwrap_err();
        assert_eq!(err.status(), Some(Status::ExecutionFailed));

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_ip_lock() {
        let (mut camera, server) = testing::connected_camera(vec![
            Step::reply(&["SL1"], "1\r\n"),
            Step::reply(&["GL"], "1\r\n"),
            Step::reply(&["SL0"], "-2\r\n"),
            Step::reply(&["SL0"], "-6\r\n"),
        ])
        .await;

        camera.set_ip_lock(IpLock::Locked).await.unwrap();
        assert_eq!(camera.get_ip_lock().await.unwrap(), IpLock::Locked);

        let err = camera.set_ip_lock(IpLock::Unlocked).await.unwrap_err();
        assert_eq!(err.status(), Some(Status::ExecutionFailed));
        assert!(camera.is_connected());

        // SL does not document -6
        let err = camera.set_ip_lock(IpLock::Unlocked).await.unwrap_err();
        assert!(matches!(err, Error::Core(insightrs_core::Error::UnknownStatus { .. })));
        assert!(!camera.is_connected());

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }
}
