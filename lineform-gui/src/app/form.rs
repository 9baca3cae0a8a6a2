use lineform_ui::component::form::Value;

use crate::schema::{self, Field, PASSWORD_MISMATCH};
use crate::services::registration::{CreateUserRequest, UserRecord, INITIAL_STATUS};

/// Transient state of the whole form, one [`Value`] per field. Lives for one
/// session of the screen and mirrors a subset of the user record plus the
/// write-only password pair.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: Value<String>,
    pub surname: Value<String>,
    pub password: Value<String>,
    pub password_confirm: Value<String>,
    pub pin: Value<String>,
    pub house_number: Value<String>,
    pub village_no: Value<String>,
    pub road: Value<String>,
    pub sub_district: Value<String>,
    pub district: Value<String>,
    pub province: Value<String>,
    pub postal_code: Value<String>,
    pub phone: Value<String>,
}

impl RegistrationForm {
    pub fn value(&self, field: Field) -> &Value<String> {
        match field {
            Field::FirstName => &self.first_name,
            Field::Surname => &self.surname,
            Field::Password => &self.password,
            Field::PasswordConfirm => &self.password_confirm,
            Field::Pin => &self.pin,
            Field::HouseNumber => &self.house_number,
            Field::VillageNo => &self.village_no,
            Field::Road => &self.road,
            Field::SubDistrict => &self.sub_district,
            Field::District => &self.district,
            Field::Province => &self.province,
            Field::PostalCode => &self.postal_code,
            Field::Phone => &self.phone,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut Value<String> {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::Surname => &mut self.surname,
            Field::Password => &mut self.password,
            Field::PasswordConfirm => &mut self.password_confirm,
            Field::Pin => &mut self.pin,
            Field::HouseNumber => &mut self.house_number,
            Field::VillageNo => &mut self.village_no,
            Field::Road => &mut self.road,
            Field::SubDistrict => &mut self.sub_district,
            Field::District => &mut self.district,
            Field::Province => &mut self.province,
            Field::PostalCode => &mut self.postal_code,
            Field::Phone => &mut self.phone,
        }
    }

    /// Applies an edit and re-runs the field's rule right away (`onChange`
    /// validation). Editing either password re-checks the pair.
    pub fn edit(&mut self, field: Field, value: String) {
        let slot = self.value_mut(field);
        slot.warning = schema::rule(field).check(&value);
        slot.value = value;
        if matches!(field, Field::Password | Field::PasswordConfirm) {
            self.check_password_pair();
        }
    }

    fn check_password_pair(&mut self) {
        self.password_confirm.warning = if !self.password_confirm.value.is_empty()
            && self.password_confirm.value != self.password.value
        {
            Some(PASSWORD_MISMATCH)
        } else {
            None
        };
    }

    /// Re-runs every rule, storing warnings. Returns whether the form is
    /// clean.
    pub fn check_all(&mut self) -> bool {
        for field in [
            Field::FirstName,
            Field::Surname,
            Field::Password,
            Field::PasswordConfirm,
            Field::Pin,
            Field::HouseNumber,
            Field::VillageNo,
            Field::Road,
            Field::SubDistrict,
            Field::District,
            Field::Province,
            Field::PostalCode,
            Field::Phone,
        ] {
            let slot = self.value_mut(field);
            slot.warning = schema::rule(field).check(&slot.value);
        }
        self.check_password_pair();
        [
            &self.first_name,
            &self.surname,
            &self.password,
            &self.password_confirm,
            &self.pin,
            &self.house_number,
            &self.village_no,
            &self.road,
            &self.sub_district,
            &self.district,
            &self.province,
            &self.postal_code,
            &self.phone,
        ]
        .iter()
        .all(|value| value.valid())
    }

    /// Loads a fetched record into the fields, wiping the password pair.
    pub fn prefill(&mut self, record: &UserRecord) {
        let set = |value: &Option<String>| Value::new(value.clone().unwrap_or_default());
        self.first_name = set(&record.first_name);
        self.surname = set(&record.surname);
        self.pin = set(&record.pin);
        self.house_number = set(&record.house_number);
        self.village_no = set(&record.village_no);
        self.road = set(&record.road);
        self.sub_district = set(&record.sub_district);
        self.district = set(&record.district);
        self.province = set(&record.province);
        self.postal_code = set(&record.postal_code);
        self.phone = set(&record.phone);
        self.password = Value::default();
        self.password_confirm = Value::default();
    }

    /// Builds the POST payload. `None` means the missing-password guard
    /// tripped: a first registration with an empty password field must not
    /// reach the network.
    pub fn prepare_request(&self, token: &str, has_record: bool) -> Option<CreateUserRequest> {
        if !has_record && (self.password.value.is_empty() || self.password_confirm.value.is_empty())
        {
            return None;
        }
        let password_hash = if self.password.value.is_empty() {
            None
        } else {
            Some(format!("{:x}", md5::compute(&self.password.value)))
        };
        Some(CreateUserRequest {
            line_id: token.to_string(),
            first_name: self.first_name.value.clone(),
            password_hash,
            pin: self.pin.value.clone(),
            status_id: INITIAL_STATUS,
            surname: self.surname.value.clone(),
            house_number: self.house_number.value.clone(),
            village_no: self.village_no.value.clone(),
            road: self.road.value.clone(),
            sub_district: self.sub_district.value.clone(),
            district: self.district.value.clone(),
            province: self.province.value.clone(),
            postal_code: self.postal_code.value.clone(),
            phone: self.phone.value.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.edit(Field::FirstName, "สมชาย".to_string());
        form.edit(Field::Surname, "ใจดี".to_string());
        form.edit(Field::Pin, "1234".to_string());
        form.edit(Field::SubDistrict, "บางรัก".to_string());
        form.edit(Field::District, "บางรัก".to_string());
        form.edit(Field::Province, "กรุงเทพมหานคร".to_string());
        form.edit(Field::PostalCode, "10500".to_string());
        form.edit(Field::Phone, "0812345678".to_string());
        form
    }

    #[test]
    fn edits_revalidate_on_every_change() {
        let mut form = RegistrationForm::default();
        form.edit(Field::Pin, "12".to_string());
        assert!(form.pin.warning.is_some());
        form.edit(Field::Pin, "1234".to_string());
        assert!(form.pin.warning.is_none());
        assert!(form.pin.accepted());
    }

    #[test]
    fn password_pair_must_match() {
        let mut form = RegistrationForm::default();
        form.edit(Field::Password, "secret".to_string());
        form.edit(Field::PasswordConfirm, "secre".to_string());
        assert_eq!(form.password_confirm.warning, Some(PASSWORD_MISMATCH));
        form.edit(Field::PasswordConfirm, "secret".to_string());
        assert!(form.password_confirm.warning.is_none());
        // Editing the first field re-checks the pair too.
        form.edit(Field::Password, "secret2".to_string());
        assert_eq!(form.password_confirm.warning, Some(PASSWORD_MISMATCH));
    }

    #[test]
    fn check_all_flags_every_broken_field() {
        let mut form = RegistrationForm::default();
        assert!(!form.check_all());
        assert!(form.first_name.warning.is_some());
        assert!(form.phone.warning.is_some());
        assert!(form.road.warning.is_none());

        let mut form = filled_form();
        assert!(form.check_all());
    }

    #[test]
    fn missing_password_guard_blocks_first_registration() {
        let form = filled_form();
        assert!(form.prepare_request("U1234", false).is_none());

        let mut form = filled_form();
        form.edit(Field::Password, "secret".to_string());
        assert!(form.prepare_request("U1234", false).is_none());
        form.edit(Field::PasswordConfirm, "secret".to_string());
        assert!(form.prepare_request("U1234", false).is_some());
    }

    #[test]
    fn resubmission_without_password_omits_the_hash() {
        let form = filled_form();
        let request = form.prepare_request("U1234", true).unwrap();
        assert!(request.password_hash.is_none());
        assert_eq!(request.line_id, "U1234");
        assert_eq!(request.status_id, INITIAL_STATUS);
    }

    #[test]
    fn password_is_hashed_not_transmitted_in_clear() {
        let mut form = filled_form();
        form.edit(Field::Password, "secret".to_string());
        form.edit(Field::PasswordConfirm, "secret".to_string());
        let request = form.prepare_request("U1234", false).unwrap();
        // md5("secret")
        assert_eq!(
            request.password_hash.as_deref(),
            Some("5ebe2294ecd0e0f08eab7690d2a6ee69")
        );
    }

    #[test]
    fn prefill_loads_record_and_clears_passwords() {
        let mut form = RegistrationForm::default();
        form.edit(Field::Password, "secret".to_string());
        form.prefill(&UserRecord {
            first_name: Some("สมชาย".to_string()),
            surname: Some("ใจดี".to_string()),
            pin: Some("1234".to_string()),
            house_number: None,
            village_no: None,
            road: None,
            sub_district: Some("บางรัก".to_string()),
            district: Some("บางรัก".to_string()),
            province: Some("กรุงเทพมหานคร".to_string()),
            postal_code: Some("10500".to_string()),
            phone: Some("0812345678".to_string()),
        });
        assert_eq!(form.first_name.value, "สมชาย");
        assert_eq!(form.house_number.value, "");
        assert!(form.password.value.is_empty());
        assert!(form.first_name.accepted());
    }
}
