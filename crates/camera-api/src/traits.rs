use crate::{
    CameraError, Extra, FrameStream, Geometry, ImageMetadata, NamedImage, PacketCallback,
    PointCloud, Properties, ResponseMetadata, Result, RtpSubscription, SubscriptionId,
};

/// The camera capability contract exposed to the host runtime.
///
/// A backend implements the methods it supports and leaves the rest on their
/// default bodies, which fail with [`CameraError::Unimplemented`] tagged with
/// the operation name. Callers can therefore always tell "not supported"
/// apart from "supported, empty result".
pub trait Camera: Send + Sync {
    /// The name this instance was constructed under.
    fn name(&self) -> &str;

    /// Encode the current image into the format named by `mime_type`.
    fn image(&self, mime_type: &str, extra: Option<&Extra>) -> Result<(Vec<u8>, ImageMetadata)>;

    /// Capture one image per source, all sharing a single capture instant.
    fn images(&self, extra: Option<&Extra>) -> Result<(Vec<NamedImage>, ResponseMetadata)>;

    /// Capabilities intrinsic to this implementation.
    fn properties(&self) -> Result<Properties>;

    /// Release the instance. Operations invoked afterwards fail with
    /// [`CameraError::Closed`].
    fn close(&self) -> Result<()>;

    /// Open a pull-based stream of frames.
    fn stream(&self) -> Result<FrameStream> {
        Err(CameraError::Unimplemented("stream"))
    }

    /// Return the next immediately available point cloud.
    fn next_point_cloud(&self) -> Result<PointCloud> {
        Err(CameraError::Unimplemented("next_point_cloud"))
    }

    /// Model-specific command dispatch.
    fn do_command(&self, _command: &Extra) -> Result<Extra> {
        Err(CameraError::Unimplemented("do_command"))
    }

    /// Geometries of the camera body, relative to its own frame.
    fn geometries(&self, _extra: Option<&Extra>) -> Result<Vec<Geometry>> {
        Err(CameraError::Unimplemented("geometries"))
    }

    /// Subscribe to the camera's raw packet stream.
    fn subscribe_rtp(
        &self,
        _buffer_size: usize,
        _on_packet: PacketCallback,
    ) -> Result<RtpSubscription> {
        Err(CameraError::Unimplemented("subscribe_rtp"))
    }

    /// Drop a packet subscription created by [`Camera::subscribe_rtp`].
    fn unsubscribe(&self, _id: SubscriptionId) -> Result<()> {
        Err(CameraError::Unimplemented("unsubscribe"))
    }
}
