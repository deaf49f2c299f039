use crate::core::rules;
use crate::domain::model::{
    BannerState, Field, FieldState, FormSubmission, ScrollTarget, SubmitOutcome,
};
use crate::domain::ports::FormSurface;

/// The per-event state machine behind the contact form. Owns one
/// `FieldState` per input plus the banner/form visibility, and mirrors every
/// state change onto the injected surface. Synchronous and free of I/O; the
/// engine layers timers and delivery on top.
pub struct FormValidator<U: FormSurface> {
    surface: U,
    fields: [FieldState; 4],
    form_visible: bool,
    banner: BannerState,
}

impl<U: FormSurface> FormValidator<U> {
    pub fn new(surface: U) -> Self {
        Self {
            surface,
            fields: Default::default(),
            form_visible: true,
            banner: BannerState::Hidden,
        }
    }

    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field as usize]
    }

    pub fn banner(&self) -> BannerState {
        self.banner
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    /// A field lost focus: run its rule once.
    pub fn handle_blur(&mut self, field: Field) -> bool {
        self.validate_field(field)
    }

    /// A field's value changed. Re-checked only while an error is showing,
    /// so the error clears as the user types; untouched fields are not
    /// validated mid-typing.
    pub fn handle_input(&mut self, field: Field, value: String) {
        self.fields[field as usize].value = value;

        if self.fields[field as usize].has_error() {
            self.validate_field(field);
        }
    }

    /// Submit always re-runs every rule, in fixed field order, regardless of
    /// prior state.
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        for field in Field::ALL {
            self.validate_field(field);
        }

        let mut first_invalid = None;
        let mut invalid_count = 0;
        for field in Field::ALL {
            if self.field(field).has_error() {
                invalid_count += 1;
                first_invalid.get_or_insert(field);
            }
        }

        if let Some(first) = first_invalid {
            tracing::debug!(
                "Submission rejected: {} invalid field(s), first: {}",
                invalid_count,
                first
            );
            self.surface.scroll_to(ScrollTarget::Field(first));
            return SubmitOutcome::Rejected {
                first_invalid: first,
                invalid_count,
            };
        }

        let submission = FormSubmission {
            name: self.field(Field::Name).value.trim().to_string(),
            email: self.field(Field::Email).value.trim().to_string(),
            subject: self.field(Field::Subject).value.trim().to_string(),
            message: self.field(Field::Message).value.trim().to_string(),
        };

        self.form_visible = false;
        self.surface.set_form_visible(false);
        self.banner = BannerState::Shown;
        self.surface.set_banner_visible(true);

        for state in &mut self.fields {
            *state = FieldState::default();
        }

        self.surface.scroll_to(ScrollTarget::Banner);

        tracing::debug!("Submission accepted from {}", submission.email);
        SubmitOutcome::Accepted(submission)
    }

    /// Timer-driven: the banner's display window elapsed.
    pub fn dismiss_banner(&mut self) {
        self.banner = BannerState::Hidden;
        self.surface.set_banner_visible(false);
    }

    /// Timer-driven: bring the (reset) form back after the banner is gone.
    pub fn restore_form(&mut self) {
        self.form_visible = true;
        self.surface.set_form_visible(true);
    }

    fn validate_field(&mut self, field: Field) -> bool {
        match rules::check(field, &self.fields[field as usize].value) {
            Ok(()) => {
                let state = &mut self.fields[field as usize];
                state.valid = Some(true);
                state.error = None;
                self.surface.clear_error(field);
                true
            }
            Err(violation) => {
                let state = &mut self.fields[field as usize];
                state.valid = Some(false);
                state.error = Some(violation.message);
                self.surface.set_error(field, violation.message);
                false
            }
        }
    }
}
