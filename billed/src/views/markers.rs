//! `data-testid` markers identifying interactive and inspectable elements.

/// Vertical layout icon for the bills list.
pub const ICON_WINDOW: &str = "icon-window";
/// Vertical layout icon for the new bill form.
pub const ICON_MAIL: &str = "icon-mail";
/// Button opening the new bill form.
pub const BTN_NEW_BILL: &str = "btn-new-bill";
/// Body of the bills table.
pub const TBODY: &str = "tbody";
/// Receipt preview icon on each bill row; carries `data-bill-url`.
pub const ICON_EYE: &str = "icon-eye";
/// Element holding an error message verbatim.
pub const ERROR_MESSAGE: &str = "error-message";
/// New bill form.
pub const FORM_NEW_BILL: &str = "form-new-bill";
/// Employee login form.
pub const FORM_EMPLOYEE: &str = "form-employee";
/// Admin login form.
pub const FORM_ADMIN: &str = "form-admin";
/// Body of the 404 page.
pub const NOT_FOUND: &str = "not-found";
/// Prefix of the dashboard's per-status groups.
pub const DASHBOARD_STATUS: &str = "dashboard-status";
