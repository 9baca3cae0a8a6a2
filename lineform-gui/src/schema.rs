//! Per-field validation rules of the registration form, re-run on every
//! keystroke. Messages are what the form shows under the field.

/// A field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    Surname,
    Password,
    PasswordConfirm,
    Pin,
    HouseNumber,
    VillageNo,
    Road,
    SubDistrict,
    District,
    Province,
    PostalCode,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed value must be non-empty.
    Required(&'static str),
    /// Exactly `len` ASCII digits.
    Digits {
        len: usize,
        warning: &'static str,
    },
    Optional,
}

impl Rule {
    /// The active warning for `value` under this rule, if any.
    pub fn check(&self, value: &str) -> Option<&'static str> {
        let value = value.trim();
        match self {
            Rule::Required(warning) => value.is_empty().then_some(*warning),
            Rule::Digits { len, warning } => {
                (value.len() != *len || !value.chars().all(|c| c.is_ascii_digit()))
                    .then_some(*warning)
            }
            Rule::Optional => None,
        }
    }
}

/// The declarative schema: one rule per field. The password pair is
/// `Optional` here because its presence is conditional on there being no
/// existing record, which the submission guard enforces; equality of the two
/// fields is a cross-field check done by the form itself.
pub fn rule(field: Field) -> Rule {
    match field {
        Field::FirstName => Rule::Required("กรุณากรอกชื่อ"),
        Field::Surname => Rule::Required("กรุณากรอกนามสกุล"),
        Field::SubDistrict => Rule::Required("กรุณากรอกตำบล"),
        Field::District => Rule::Required("กรุณากรอกอำเภอ"),
        Field::Province => Rule::Required("กรุณากรอกจังหวัด"),
        Field::Pin => Rule::Digits {
            len: 4,
            warning: "กรุณากรอก PIN 4 หลัก",
        },
        Field::PostalCode => Rule::Digits {
            len: 5,
            warning: "กรุณากรอกรหัสไปรษณีย์ 5 หลัก",
        },
        Field::Phone => Rule::Digits {
            len: 10,
            warning: "กรุณากรอกเบอร์โทรศัพท์ 10 หลัก",
        },
        Field::Password
        | Field::PasswordConfirm
        | Field::HouseNumber
        | Field::VillageNo
        | Field::Road => Rule::Optional,
    }
}

/// Warning shown when the two password fields differ.
pub const PASSWORD_MISMATCH: &str = "รหัสผ่านไม่ตรงกัน";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_reject_blank_input() {
        for field in [
            Field::FirstName,
            Field::Surname,
            Field::SubDistrict,
            Field::District,
            Field::Province,
        ] {
            assert!(rule(field).check("").is_some());
            assert!(rule(field).check("   ").is_some());
            assert!(rule(field).check("สมชาย").is_none());
        }
    }

    #[test]
    fn pin_is_exactly_four_digits() {
        let rule = rule(Field::Pin);
        assert!(rule.check("1234").is_none());
        assert!(rule.check("123").is_some());
        assert!(rule.check("12345").is_some());
        assert!(rule.check("12a4").is_some());
        assert!(rule.check("").is_some());
    }

    #[test]
    fn postal_code_is_exactly_five_digits() {
        let rule = rule(Field::PostalCode);
        assert!(rule.check("10500").is_none());
        assert!(rule.check("1050").is_some());
        assert!(rule.check("105000").is_some());
    }

    #[test]
    fn phone_is_exactly_ten_digits() {
        let rule = rule(Field::Phone);
        assert!(rule.check("0812345678").is_none());
        assert!(rule.check("081234567").is_some());
        assert!(rule.check("081-234567").is_some());
    }

    #[test]
    fn address_extras_are_optional() {
        for field in [Field::HouseNumber, Field::VillageNo, Field::Road] {
            assert!(rule(field).check("").is_none());
            assert!(rule(field).check("123/12").is_none());
        }
    }
}
