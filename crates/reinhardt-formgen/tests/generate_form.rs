//! Form rendering through `#[derive(Form)]`.

use reinhardt_formgen::prelude::*;
use rstest::{fixture, rstest};

#[derive(Form, Debug, Default)]
struct Registration {
	#[form(field = "name", name = "Имя пользователя", type = "text", required)]
	username: String,

	#[form(field = "password", name = "Пароль пользователя", type = "password", required = "true")]
	password: String,

	#[form(field = "resident", type = "radio", radio = "1;checked", name = "Резидент РФ")]
	resident: bool,

	#[form(field = "resident", type = "radio", radio = "2", name = "Не резидент РФ")]
	no_resident: bool,

	#[form(field = "gender", name = "Пол", type = "select", select = "Не указан=0;selected,М=1,Ж=2")]
	gender: String,

	#[form(field = "agree", type = "checkbox", name = "Согласен с условиями", default)]
	agree: bool,

	#[form(field = "age", name = "Возраст", type = "text", default)]
	age: u64,

	#[form(field = "token", type = "hidden", default)]
	token: String,

	#[form(field = "duration", type = "hidden")]
	duration: i64,

	// Not part of the form
	session_id: Option<String>,
}

#[derive(Form, Default)]
struct Tagged {
	#[form(field = "title", name = "Title", type = "text")]
	title: String,

	#[form(field = "tags", name = "Tags", type = "text")]
	tags: Vec<String>,
}

#[derive(Form, Default)]
struct Internal {
	#[form(field = "title", name = "Title", type = "text", default)]
	title: String,

	#[form(field = "-", type = "text")]
	tags: Vec<String>,

	#[form(field = "")]
	secret: String,
}

#[fixture]
fn registration() -> Registration {
	Registration {
		username: "testuser".to_string(),
		age: 20,
		token: "a628228b1089458da6ff6e58d979bb65".to_string(),
		..Registration::default()
	}
}

#[rstest]
fn test_generate_registration_form(registration: Registration) {
	let html = generate_form(&registration).unwrap();

	let expected = [
		"<label for=\"name\">Имя пользователя</label>\n    <input type=\"text\" name=\"name\" required>",
		"<label for=\"password\">Пароль пользователя</label>\n    <input type=\"password\" name=\"password\" required>",
		"<label>\n        <input type=\"radio\" name=\"resident\" value=\"1\" checked> Резидент РФ\n    </label>",
		"<label>\n        <input type=\"radio\" name=\"resident\" value=\"2\"> Не резидент РФ\n    </label>",
		concat!(
			"<label for=\"gender\">Пол</label>\n",
			"    <select name=\"gender\">\n",
			"        <option value=\"0\" selected>Не указан</option>\n",
			"        <option value=\"1\">М</option>\n",
			"        <option value=\"2\">Ж</option>\n",
			"    </select>"
		),
		"<label>\n        <input type=\"checkbox\" name=\"agree\"> Согласен с условиями\n    </label>",
		"<label for=\"age\">Возраст</label>\n    <input type=\"text\" name=\"age\" value=\"20\">",
		"<input type=\"hidden\" name=\"token\" value=\"a628228b1089458da6ff6e58d979bb65\">",
		"<input type=\"hidden\" name=\"duration\">",
	]
	.join("<br>");

	assert_eq!(html, expected);
}

#[rstest]
fn test_checkbox_default_follows_value(mut registration: Registration) {
	registration.agree = true;

	let html = generate_form(&registration).unwrap();

	assert!(html.contains("<input type=\"checkbox\" name=\"agree\" checked>"));
}

#[rstest]
fn test_generate_is_repeatable(registration: Registration) {
	assert_eq!(
		generate_form(&registration).unwrap(),
		generate_form(&registration).unwrap()
	);
}

#[rstest]
fn test_derived_schema_lists_annotated_fields() {
	let schema = Registration::schema();

	assert_eq!(schema.name(), "Registration");
	assert_eq!(schema.len(), 9);
	assert!(schema.field("session_id").is_none());
	assert_eq!(schema.field("age").unwrap().meta().label, "Возраст");
	assert!(schema.field("username").unwrap().meta().required);
}

#[rstest]
fn test_generate_rejects_unsupported_field_type() {
	let err = generate_form(&Tagged::default()).unwrap_err();

	assert!(matches!(
		err,
		FormgenError::UnsupportedFieldType { ref field, ref type_name }
			if field == "tags" && type_name == "Vec<String>"
	));
}

#[rstest]
fn test_generate_skips_excluded_fields() {
	let form = Internal {
		title: "Hello".to_string(),
		..Internal::default()
	};

	let html = generate_form(&form).unwrap();

	assert_eq!(
		html,
		"<label for=\"title\">Title</label>\n    <input type=\"text\" name=\"title\" value=\"Hello\">"
	);
}

#[rstest]
fn test_generate_with_configured_separator(registration: Registration) {
	let config = FormConfig::from_toml_str("separator = \"\\n\"").unwrap();
	let engine = FormEngine::new(config);

	let html = engine.generate(&registration).unwrap();

	assert!(!html.contains("<br>"));
	assert!(html.starts_with("<label for=\"name\">"));
}

#[rstest]
fn test_label_text_is_escaped() {
	#[derive(Form, Default)]
	struct Terms {
		#[form(field = "terms", name = "Terms & <Conditions>", type = "checkbox")]
		terms: bool,
	}

	let html = generate_form(&Terms::default()).unwrap();

	assert!(html.contains("> Terms &amp; &lt;Conditions&gt;\n"));
}

#[rstest]
fn test_generate_renders_integer_widths() {
	#[derive(Form, Default)]
	struct Inventory {
		#[form(field = "age", name = "Age", type = "text", default)]
		age: usize,

		#[form(field = "count", name = "Count", type = "hidden", default)]
		count: i32,
	}

	let form = Inventory { age: 32, count: -5 };

	let html = generate_form(&form).unwrap();

	assert_eq!(
		html,
		concat!(
			"<label for=\"age\">Age</label>\n",
			"    <input type=\"text\" name=\"age\" value=\"32\">",
			"<br>",
			"<input type=\"hidden\" name=\"count\" value=\"-5\">"
		)
	);
}
