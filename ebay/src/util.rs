use marketplace::{ApiError, ApiResponse, SyncError};
use serde_json::Value;

pub(crate) trait SellApiResponseExt {
    fn success_json(self) -> Result<Value, SyncError>;
}

impl SellApiResponseExt for ApiResponse {
    /// 2xx responses yield the raw JSON body (null when the body is empty);
    /// anything else becomes an API error carrying the status and body.
    fn success_json(self) -> Result<Value, SyncError> {
        if !self.is_success() {
            return ApiError {
                marketplace: crate::MARKETPLACE,
                status: self.status.as_u16(),
                body: self.body,
            }
            .fail();
        }
        self.json_value()
    }
}
