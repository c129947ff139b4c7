//! Unauthenticated landing page with the employee and admin login forms.
//!
//! The forms are inert here; submitting credentials belongs to the external
//! login flow.

use super::RenderContext;
use super::markers::{FORM_ADMIN, FORM_EMPLOYEE};
use crate::domain::ViewState;

/// Render the login page. The view state is ignored.
pub fn render(_state: &ViewState, _ctx: &RenderContext) -> String {
    format!(
        "<div class=\"login-page\"><div class=\"login-title\">Billed</div>\
         <div class=\"login-columns\">{employee}{admin}</div></div>",
        employee = login_form(FORM_EMPLOYEE, "employee", "Employé"),
        admin = login_form(FORM_ADMIN, "admin", "Administration"),
    )
}

fn login_form(marker: &str, prefix: &str, heading: &str) -> String {
    format!(
        "<div class=\"login-column\"><h2>{heading}</h2>\
         <form data-testid=\"{marker}\"><label for=\"{prefix}-email-input\">Votre email</label>\
         <input type=\"email\" data-testid=\"{prefix}-email-input\" required>\
         <label for=\"{prefix}-password-input\">Mot de passe</label>\
         <input type=\"password\" data-testid=\"{prefix}-password-input\" required>\
         <button type=\"submit\" data-testid=\"{prefix}-login-button\" class=\"btn btn-primary\">\
         Se connecter</button></form></div>"
    )
}
