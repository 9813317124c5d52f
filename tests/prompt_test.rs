use std::io::Cursor;

use tfmodulegen::config::Config;
use tfmodulegen::error::Error;
use tfmodulegen::module::Provider;
use tfmodulegen::prompt::{collect_module, is_affirmative, LinePrompter, Prompter};

fn scripted(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
    LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn transcript(prompter: LinePrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(prompter.into_writer()).unwrap()
}

fn google() -> Provider {
    Provider {
        name: "google".to_string(),
        source: "hashicorp/google".to_string(),
        version: "6.4.0".to_string(),
    }
}

#[test]
fn test_is_affirmative() {
    assert!(is_affirmative("y"));
    assert!(is_affirmative("yes"));
    assert!(is_affirmative("Y"));
    assert!(is_affirmative(" YeS "));
    assert!(!is_affirmative("n"));
    assert!(!is_affirmative(""));
    assert!(!is_affirmative("yep"));
}

#[test]
fn test_line_prompter_reads_one_line() {
    let mut prompter = scripted("first\r\nsecond\n");
    assert_eq!(prompter.input("One").unwrap(), "first");
    assert_eq!(prompter.input("Two").unwrap(), "second");
    assert!(prompter.input("Three").is_err());
    assert_eq!(transcript(prompter), "One: Two: Three: ");
}

#[test]
fn test_line_prompter_rejects_unterminated_line() {
    let mut prompter = scripted("first\nsecond");
    assert_eq!(prompter.input("One").unwrap(), "first");

    let err = prompter.input("Two").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn test_collect_unterminated_last_answer_aborts() {
    let mut prompter = scripted("network\n\n\nn");
    match collect_module(&mut prompter, &Config::default()) {
        Err(Error::InputError { field, .. }) => assert_eq!(field, "input"),
        other => panic!("Expected InputError, got {other:?}"),
    }
}

#[test]
fn test_collect_without_config() {
    let mut prompter = scripted("  network  \n VPC module \n\nno\n");
    let module = collect_module(&mut prompter, &Config::default()).unwrap();

    assert_eq!(module.module_name, "network");
    assert_eq!(module.description, "VPC module");
    assert_eq!(module.terraform_version, ">= 0.12");
    assert!(module.providers.is_empty());

    let transcript = transcript(prompter);
    assert!(transcript.contains("Enter required Terraform version (default: >= 0.12): "));
    assert_eq!(transcript.matches("Do you want to add a provider? (y/n): ").count(), 1);
}

#[test]
fn test_collect_explicit_version_overrides_config() {
    let config = Config {
        terraform_version: "~> 1.9.6".to_string(),
        providers: Vec::new(),
    };
    let mut prompter = scripted("network\n\n>= 1.5\n\n");
    let module = collect_module(&mut prompter, &config).unwrap();

    assert_eq!(module.terraform_version, ">= 1.5");
    assert!(transcript(prompter)
        .contains("Enter required Terraform version (default from config: ~> 1.9.6): "));
}

#[test]
fn test_collect_empty_version_uses_config() {
    let config = Config {
        terraform_version: "~> 1.9.6".to_string(),
        providers: Vec::new(),
    };
    let mut prompter = scripted("network\n\n   \nn\n");
    let module = collect_module(&mut prompter, &config).unwrap();

    assert_eq!(module.terraform_version, "~> 1.9.6");
}

#[test]
fn test_collect_interactive_providers_in_order() {
    let input = "network\n\n\n\
                 y\ngoogle\nhashicorp/google\n6.4.0\n\
                 YES\n\n\n\n\
                 Y\ngoogle\nhashicorp/google\n6.4.0\n\
                 done\n";
    let mut prompter = scripted(input);
    let module = collect_module(&mut prompter, &Config::default()).unwrap();

    assert_eq!(
        module.providers,
        vec![google(), Provider::default(), google()]
    );
}

#[test]
fn test_collect_configured_providers_skip_prompt() {
    let config = Config {
        terraform_version: String::new(),
        providers: vec![google()],
    };
    let mut prompter = scripted("network\n\n\ny\nrandom\nhashicorp/random\n3.6.3\n");
    let module = collect_module(&mut prompter, &config).unwrap();

    assert_eq!(module.providers, vec![google()]);

    let transcript = transcript(prompter);
    assert!(!transcript.contains("Do you want to add a provider?"));
    assert!(transcript.contains("Using provider configuration from config file:\n"));
    assert!(transcript.contains("  - google: source=hashicorp/google, version=6.4.0\n"));
}

#[test]
fn test_collect_accepts_empty_module_name() {
    let mut prompter = scripted("\n\n\n\n");
    let module = collect_module(&mut prompter, &Config::default()).unwrap();
    assert_eq!(module.module_name, "");
}

#[test]
fn test_collect_closed_input_aborts() {
    let mut prompter = scripted("");
    match collect_module(&mut prompter, &Config::default()) {
        Err(Error::InputError { field, .. }) => assert_eq!(field, "module name"),
        other => panic!("Expected InputError, got {other:?}"),
    }

    let mut prompter = scripted("network\n\n\ny\ngoogle\n");
    match collect_module(&mut prompter, &Config::default()) {
        Err(Error::InputError { field, .. }) => assert_eq!(field, "provider source"),
        other => panic!("Expected InputError, got {other:?}"),
    }
}

#[test]
fn test_collect_closed_input_before_provider_question() {
    let mut prompter = scripted("network\ndesc\n>= 1.0\n");
    assert!(collect_module(&mut prompter, &Config::default()).is_err());
}
