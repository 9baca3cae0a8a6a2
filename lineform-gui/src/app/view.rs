use iced::{Alignment, Length};

use lineform_ui::{
    component::{button, form, text},
    theme,
    widget::*,
};

use crate::app::form::RegistrationForm;
use crate::app::message::ViewMessage;
use crate::schema::Field;

/// The whole form screen. `has_record` flips it into the read-only
/// "already registered" mode: fields disabled, password pair and submit
/// affordance gone.
pub fn registration<'a>(
    form: &'a RegistrationForm,
    display_name: &'a str,
    has_record: bool,
    processing: bool,
    has_token: bool,
) -> Element<'a, ViewMessage> {
    let line_user = form::Value::new(display_name.to_string());

    let mut col = Column::new()
        .spacing(15)
        .max_width(600)
        .push(
            Container::new(text::h2("ลงทะเบียน"))
                .center_x(Length::Fill)
                .padding(10),
        )
        .push(labelled(
            "LINE-USER",
            form::Form::new_disabled("LINE-USER", &line_user).padding(10),
        ))
        .push(field(
            "ชื่อ",
            "กรอกชื่อ",
            Field::FirstName,
            &form.first_name,
            has_record,
        ))
        .push(field(
            "นามสกุล",
            "กรอกนามสกุล",
            Field::Surname,
            &form.surname,
            has_record,
        ));

    if !has_record {
        col = col
            .push(labelled(
                "รหัสผ่าน",
                form::Form::new("กรอกรหัสผ่าน", &form.password, |v| {
                    ViewMessage::FieldEdited(Field::Password, v)
                })
                .secure()
                .padding(10),
            ))
            .push(labelled(
                "รหัสผ่าน (อีกครั้ง)",
                form::Form::new("ยืนยันรหัสผ่าน", &form.password_confirm, |v| {
                    ViewMessage::FieldEdited(Field::PasswordConfirm, v)
                })
                .secure()
                .padding(10),
            ));
    }

    col = col
        .push(digits_field(
            "Pin 4 หลัก",
            "1234",
            Field::Pin,
            &form.pin,
            4,
            has_record,
        ))
        .push(field(
            "เลขที่บ้าน",
            "123/12",
            Field::HouseNumber,
            &form.house_number,
            has_record,
        ))
        .push(field("หมู่", "1", Field::VillageNo, &form.village_no, has_record))
        .push(field("ถนน", "-", Field::Road, &form.road, has_record))
        .push(field(
            "ตำบล",
            "กรอกตำบล",
            Field::SubDistrict,
            &form.sub_district,
            has_record,
        ))
        .push(field(
            "อำเภอ",
            "กรอกอำเภอ",
            Field::District,
            &form.district,
            has_record,
        ))
        .push(field(
            "จังหวัด",
            "กรอกจังหวัด",
            Field::Province,
            &form.province,
            has_record,
        ))
        .push(digits_field(
            "รหัสไปรษณีย์",
            "กรอกรหัสไปรษณีย์",
            Field::PostalCode,
            &form.postal_code,
            5,
            has_record,
        ))
        .push(digits_field(
            "เบอร์โทรศัพท์",
            "กรอกเบอร์โทรศัพท์",
            Field::Phone,
            &form.phone,
            10,
            has_record,
        ));

    if !has_record {
        col = col.push(
            Container::new(
                button::primary("บันทึก")
                    .width(Length::Fixed(200.0))
                    .on_press_maybe(if processing || !has_token {
                        None
                    } else {
                        Some(ViewMessage::Submit)
                    }),
            )
            .center_x(Length::Fill)
            .padding(15),
        );
    }

    Scrollable::new(
        Container::new(col)
            .center_x(Length::Fill)
            .padding(30)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn labelled<'a>(
    label: &'static str,
    input: form::Form<'a, ViewMessage>,
) -> Element<'a, ViewMessage> {
    Column::new()
        .spacing(5)
        .push(text::p2_regular(label).style(theme::text::secondary))
        .push(input)
        .into()
}

fn field<'a>(
    label: &'static str,
    placeholder: &'static str,
    field: Field,
    value: &'a form::Value<String>,
    disabled: bool,
) -> Element<'a, ViewMessage> {
    let input = if disabled {
        form::Form::new_disabled(placeholder, value)
    } else {
        form::Form::new(placeholder, value, move |v| {
            ViewMessage::FieldEdited(field, v)
        })
    };
    labelled(label, input.padding(10))
}

fn digits_field<'a>(
    label: &'static str,
    placeholder: &'static str,
    field: Field,
    value: &'a form::Value<String>,
    max: usize,
    disabled: bool,
) -> Element<'a, ViewMessage> {
    let input = if disabled {
        form::Form::new_disabled(placeholder, value)
    } else {
        form::Form::new_digits(placeholder, value, max, move |v| {
            ViewMessage::FieldEdited(field, v)
        })
    };
    labelled(label, input.padding(10))
}

/// Single-slot alert dialog content.
pub fn alert<'a>(message: &'a str) -> Element<'a, ViewMessage> {
    Column::new()
        .spacing(20)
        .align_x(Alignment::Center)
        .push(text::p1_regular(message))
        .push(
            button::secondary("ปิด")
                .width(Length::Fixed(120.0))
                .on_press(ViewMessage::CloseAlert),
        )
        .into()
}
