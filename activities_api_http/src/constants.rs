pub struct ApiUrls;

impl ApiUrls {
    pub const LOCAL_ADDRESS: &'static str = "http://localhost:8000";
}

pub struct ApiEndpoints;

impl ApiEndpoints {
    pub const ACTIVITIES: &'static str = "/activities";
    pub const SIGNUP: &'static str = "signup";
    pub const UNREGISTER: &'static str = "unregister";
}
