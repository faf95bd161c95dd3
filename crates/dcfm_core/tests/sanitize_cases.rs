// crates/dcfm_core/tests/sanitize_cases.rs
//
// Stored-content injection: whatever a visitor types must come out of the
// sanitizers without anything a browser would execute or render as markup.

use dcfm_core::models::SubmissionFields;
use dcfm_core::sanitize::{sanitize_text_field, sanitize_textarea_field};
use dcfm_core::validate;

struct InjectionCase {
    name: &'static str,
    input: &'static str,
    text_field: &'static str,
    textarea: &'static str,
}

const CASES: &[InjectionCase] = &[
    InjectionCase {
        name: "Plain_Text",
        input: "Just a question about pricing",
        text_field: "Just a question about pricing",
        textarea: "Just a question about pricing",
    },
    InjectionCase {
        name: "Inline_Script",
        input: "hi<script>document.location='//evil'</script>",
        text_field: "hi",
        textarea: "hi",
    },
    InjectionCase {
        name: "Script_Across_Lines",
        input: "a<script>\nfetch('/x')\n</script>\nb",
        text_field: "a b",
        textarea: "a\nb",
    },
    InjectionCase {
        name: "Event_Handler_Attribute",
        input: "<img src=x onerror=alert(1)>",
        text_field: "",
        textarea: "",
    },
    InjectionCase {
        name: "Unclosed_Tag",
        input: "<svg onload=alert(1)",
        text_field: "&lt;svg onload=alert(1)",
        textarea: "&lt;svg onload=alert(1)",
    },
    InjectionCase {
        name: "Nested_Open_Brackets",
        input: "<<b>bold</b>",
        text_field: "&lt;bold",
        textarea: "&lt;bold",
    },
    InjectionCase {
        name: "Percent_Encoded_Tag",
        input: "%3Cscript%3Ealert(1)",
        text_field: "scriptalert(1)",
        textarea: "scriptalert(1)",
    },
    InjectionCase {
        name: "Multiline_Message",
        input: "First line\r\nSecond\tline\n\nThird",
        text_field: "First line Second line Third",
        textarea: "First line\nSecond\tline\n\nThird",
    },
];

#[test]
fn test_injection_cases() {
    for case in CASES {
        assert_eq!(
            sanitize_text_field(case.input),
            case.text_field,
            "{}: text field",
            case.name
        );
        assert_eq!(
            sanitize_textarea_field(case.input),
            case.textarea,
            "{}: textarea",
            case.name
        );
    }
}

#[test]
fn test_no_sanitized_value_contains_a_tag_opener() {
    for case in CASES {
        for value in [sanitize_text_field(case.input), sanitize_textarea_field(case.input)] {
            assert!(!value.contains('<'), "{}: '<' survived in {:?}", case.name, value);
        }
    }
}

#[test]
fn test_validated_submission_from_json_body() {
    // Optional fields may be omitted entirely by API clients.
    let raw: SubmissionFields = serde_json::from_str(
        r#"{"name":"Ann","email":"ann@example.com","message":"Hi"}"#,
    )
    .expect("body parses");

    let clean = validate(&raw).expect("valid");
    assert_eq!(clean.phone(), "");
    assert_eq!(clean.company_name(), "");
}
