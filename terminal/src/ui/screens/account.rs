//! # Account Screen
//!
//! Profile settings plus the identity verification flow. The verification
//! tab renders whatever the wizard says the current step is: one of the
//! three input steps with its form, or one of the outcome panels.

use egui;

use shared::dto::kyc::DocumentType;

use crate::app::{AccountTab, App, AppState};
use crate::kyc::{KycForms, KycStep};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::utils::validation::FieldErrors;

/// Render account screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.heading("Account");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for tab in AccountTab::all() {
            let selected = state.account.active_tab == *tab;
            if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                app.state.write().account.active_tab = *tab;
            }
        }
    });
    ui.separator();
    ui.add_space(8.0);

    match state.account.active_tab {
        AccountTab::Profile => render_profile(ui, state, app, &theme),
        AccountTab::Verification => render_verification(ui, state, app, &theme),
    }
}

fn render_profile(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, "Profile", theme);

    let mut name = state.account.profile.full_name.clone();
    let mut email = state.account.profile.email.clone();

    forms::render_text_input(ui, "Full name:", &mut name, "Your name", [260.0, 24.0]);
    ui.add_space(6.0);
    forms::render_text_input(ui, "Email:", &mut email, "you@example.com", [260.0, 24.0]);
    ui.add_space(10.0);

    if name != state.account.profile.full_name || email != state.account.profile.email {
        let mut guard = app.state.write();
        guard.account.profile.full_name = name;
        guard.account.profile.email = email;
    }

    if forms::render_button(ui, "Save", None, Some(egui::vec2(120.0, 26.0))).clicked() {
        app.handle_profile_save();
    }
}

fn render_verification(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let wizard = &state.account.kyc.wizard;
    let step = wizard.current_step;

    forms::render_form_heading(ui, "Identity Verification", theme);

    if step.is_active() {
        if let Some(percent) = step.progress_percent() {
            ui.add(
                egui::ProgressBar::new(percent / 100.0)
                    .text(format!("{:.0}%", percent))
                    .desired_width(320.0),
            );
        }
        ui.add_space(6.0);
        ui.label(egui::RichText::new(step.title()).strong());
        ui.add_space(10.0);

        let mut buffers = state.account.kyc.forms.clone();
        let errors = &state.account.kyc.field_errors;
        match step {
            KycStep::PersonalInfo => render_personal_info(ui, &mut buffers, errors, theme),
            KycStep::DocumentUpload => render_document(ui, &mut buffers, errors, theme),
            KycStep::Selfie => render_selfie(ui, &mut buffers, errors, theme),
            _ => {}
        }
        if buffers != state.account.kyc.forms {
            app.state.write().account.kyc.forms = buffers;
        }

        if let Some(error) = &wizard.submission_error {
            forms::render_error(ui, error, theme);
        }

        let label = if wizard.is_submitting {
            "Submitting..."
        } else if step == KycStep::Selfie {
            "Submit for review"
        } else {
            "Continue"
        };
        let button = forms::render_button(
            ui,
            label,
            Some(theme.selected.gamma_multiply(0.4)),
            Some(egui::vec2(180.0, 28.0)),
        );
        if button.clicked() && !wizard.is_submitting {
            app.handle_kyc_continue();
        }
        return;
    }

    match step {
        KycStep::Pending => {
            ui.group(|ui| {
                ui.colored_label(theme.warning, "Verification pending");
                ui.label("Your documents were submitted and will be reviewed within 1-2 business days.");
            });
        }
        KycStep::Verified => {
            ui.group(|ui| {
                ui.colored_label(theme.success, "Verified");
                ui.label("Your identity has been confirmed. All account features are unlocked.");
            });
        }
        KycStep::Rejected => {
            ui.group(|ui| {
                ui.colored_label(theme.error, "Verification rejected");
                ui.label("We could not verify your identity from the submitted information.");
                ui.add_space(6.0);
                if forms::render_button(
                    ui,
                    "Retry verification",
                    None,
                    Some(egui::vec2(160.0, 26.0)),
                )
                .clicked()
                {
                    app.handle_kyc_restart();
                }
            });
        }
        _ => {}
    }
}

fn render_personal_info(
    ui: &mut egui::Ui,
    buffers: &mut KycForms,
    errors: &FieldErrors,
    theme: &Theme,
) {
    let form = &mut buffers.personal;
    let size = [260.0, 24.0];
    forms::render_validated_input(ui, "First name:", "first_name", &mut form.first_name, "Jane", size, errors, theme);
    forms::render_validated_input(ui, "Last name:", "last_name", &mut form.last_name, "Doe", size, errors, theme);
    forms::render_validated_input(
        ui,
        "Date of birth:",
        "date_of_birth",
        &mut form.date_of_birth,
        "YYYY-MM-DD",
        size,
        errors,
        theme,
    );
    forms::render_validated_input(ui, "Nationality:", "nationality", &mut form.nationality, "e.g. German", size, errors, theme);
    forms::render_validated_input(
        ui,
        "Address:",
        "address_line1",
        &mut form.address_line1,
        "Street and number",
        size,
        errors,
        theme,
    );
    forms::render_validated_input(ui, "City:", "city", &mut form.city, "City", size, errors, theme);
    forms::render_validated_input(ui, "Postal code:", "postal_code", &mut form.postal_code, "Postal code", size, errors, theme);
    forms::render_validated_input(ui, "Country:", "country", &mut form.country, "Country", size, errors, theme);
}

fn render_document(
    ui: &mut egui::Ui,
    buffers: &mut KycForms,
    errors: &FieldErrors,
    theme: &Theme,
) {
    let form = &mut buffers.document;

    ui.label("Document type:");
    let selected_label = form
        .document_type
        .map(|doc_type| doc_type.label())
        .unwrap_or("Select...");
    egui::ComboBox::from_id_salt("document_type")
        .selected_text(selected_label)
        .show_ui(ui, |ui| {
            for doc_type in DocumentType::all() {
                ui.selectable_value(&mut form.document_type, Some(*doc_type), doc_type.label());
            }
        });
    if let Some(message) = errors.get("document_type") {
        ui.colored_label(theme.error, message);
    }
    ui.add_space(6.0);

    let size = [260.0, 24.0];
    forms::render_validated_input(
        ui,
        "Front of document:",
        "front_image",
        &mut form.front_image,
        "File reference",
        size,
        errors,
        theme,
    );
    forms::render_validated_input(
        ui,
        "Back of document (optional):",
        "back_image",
        &mut form.back_image,
        "File reference",
        size,
        errors,
        theme,
    );
}

fn render_selfie(
    ui: &mut egui::Ui,
    buffers: &mut KycForms,
    errors: &FieldErrors,
    theme: &Theme,
) {
    forms::render_hint(
        ui,
        "Take a clear photo of your face. Make sure it matches your document.",
        theme,
    );
    ui.add_space(4.0);
    forms::render_validated_input(
        ui,
        "Selfie:",
        "image",
        &mut buffers.selfie.image,
        "File reference",
        [260.0, 24.0],
        errors,
        theme,
    );
}
