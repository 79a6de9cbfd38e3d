pub mod report_email;
pub mod resend_request;
