use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const AVATAR_GROUP: &str = r#"
import type { ButtonAnimationType } from "@/components/cardStack/types";

interface Avatar {
  src: string;
  alt: string;
}

interface AvatarGroupProps {
  avatars: Avatar[];
  text?: string;
  maxVisible?: number;
  animationType?: ButtonAnimationType;
}

const AvatarGroup = ({ avatars, text, maxVisible = 5 }: AvatarGroupProps) => null;

export default AvatarGroup;
"#;

const FAQ_BASE: &str = r#"
type FaqBaseProps = {
    faqs: FaqItem[];
    title: string;
    animationType?: "smooth" | "instant"; // accordion motion
};
"#;

#[test]
fn test_registry_not_found() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_missing_component_file() -> Result<()> {
    let test = CliTest::with_registry(
        r#"{
            "componentRegistry": {
                "shared": [
                    { "name": "Ghost", "path": "@/components/shared/Ghost", "propsSchema": { "a": "string" } }
                ]
            }
        }"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_full_report() -> Result<()> {
    let test = CliTest::with_registry(
        r#"{
            "componentRegistry": {
                "shared": [
                    {
                        "name": "AvatarGroup",
                        "path": "@/components/shared/AvatarGroup",
                        "propsSchema": {
                            "avatars": "Array<{ src: string; alt: string }>",
                            "text": "string",
                            "maxVisible": "number?",
                            "className": "string?"
                        }
                    },
                    { "name": "Divider", "propsSchema": {} }
                ]
            },
            "sectionRegistry": {
                "faq": [
                    {
                        "name": "FaqBase",
                        "path": "@/components/sections/faq/FaqBase",
                        "propsSchema": {
                            "faqs": "FaqItem[]",
                            "title": "string",
                            "animationType": "'smooth' | 'instant'?"
                        }
                    }
                ]
            }
        }"#,
    )?;
    test.write_file("src/components/shared/AvatarGroup.tsx", AVATAR_GROUP)?;
    test.write_file("src/components/sections/faq/FaqBase.tsx", FAQ_BASE)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_clean_registry() -> Result<()> {
    let test = CliTest::with_registry(
        r#"{
            "sectionRegistry": {
                "faq": [
                    {
                        "name": "FaqBase",
                        "path": "@/components/sections/faq/FaqBase.tsx",
                        "propsSchema": {
                            "faqs": "FaqItem[]",
                            "title": "string",
                            "animationType": "string?"
                        }
                    }
                ]
            }
        }"#,
    )?;
    test.write_file("src/components/sections/faq/FaqBase.tsx", FAQ_BASE)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_file_without_props_block() -> Result<()> {
    let test = CliTest::with_registry(
        r#"{ "componentRegistry": { "ui": [ { "name": "Plain", "path": "@/components/Plain" } ] } }"#,
    )?;
    test.write_file(
        "src/components/Plain.tsx",
        "export default function Plain() { return null; }",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_empty_props_block() -> Result<()> {
    let test = CliTest::with_registry(
        r#"{ "componentRegistry": { "layout": [
            { "name": "Spacer", "path": "@/components/Spacer", "propsSchema": { "size": "number", "axis": "string?" } }
        ] } }"#,
    )?;
    test.write_file(
        "src/components/Spacer.tsx",
        "interface SpacerProps {\n  // none\n}\n",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_default_command_is_check() -> Result<()> {
    let test = CliTest::with_registry(
        r#"{ "componentRegistry": { "ui": [ { "name": "Ghost", "path": "@/components/Ghost" } ] } }"#,
    )?;

    assert_cmd_snapshot!(test.command());

    Ok(())
}

#[test]
fn test_malformed_registry() -> Result<()> {
    let test = CliTest::with_registry(r#"{ "componentRegistry": "#)?;

    let mut settings = test.settings();
    settings.add_filter("Failed to parse registry: .*", "Failed to parse registry: [PARSE ERROR]");
    settings.bind(|| {
        assert_cmd_snapshot!(test.check_command());
    });

    Ok(())
}

#[test]
fn test_registry_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "config/components.json",
        r#"{ "componentRegistry": { "ui": [ { "name": "Ghost", "path": "@/Ghost" } ] } }"#,
    )?;

    assert_cmd_snapshot!(
        test.check_command()
            .args(["--registry", "config/components.json"])
    );

    Ok(())
}

#[test]
fn test_registry_flag_not_found() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command().args(["--registry", "nope.json"]));

    Ok(())
}

#[test]
fn test_config_file_settings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".propcheckrc.json",
        r#"{
            "registry": "design/registry.json",
            "aliasPrefix": "~/",
            "aliasRoot": "app/",
            "extension": ".jsx"
        }"#,
    )?;
    test.write_file(
        "design/registry.json",
        r#"{ "componentRegistry": { "ui": [
            { "name": "Badge", "path": "~/ui/Badge", "propsSchema": { "label": "string" } }
        ] } }"#,
    )?;
    test.write_file("app/ui/Badge.jsx", "interface BadgeProps { label: string; }")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_run_from_nested_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".git/HEAD", "ref: refs/heads/main\n")?;
    test.write_file(
        ".propcheckrc.json",
        r#"{ "registry": "design/registry.json" }"#,
    )?;
    test.write_file(
        "design/registry.json",
        r#"{ "componentRegistry": { "ui": [
            { "name": "Badge", "path": "@/ui/Badge", "propsSchema": { "label": "string" } },
            { "name": "Ghost", "path": "@/ui/Ghost" }
        ] } }"#,
    )?;
    test.write_file("src/ui/Badge.tsx", "interface BadgeProps { label: string; }")?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.check_command().current_dir(test.root().join("src/ui")));
    });

    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".propcheckrc.json", r#"{ "optionality": "sometimes" }"#)?;

    let mut settings = test.settings();
    settings.add_filter(
        r#"\.propcheckrc\.json": .*"#,
        r#".propcheckrc.json": [PARSE ERROR]"#,
    );
    settings.bind(|| {
        assert_cmd_snapshot!(test.check_command());
    });

    Ok(())
}

const LINK_REGISTRY: &str = r#"{ "componentRegistry": { "ui": [
    { "name": "Link", "path": "@/Link", "propsSchema": { "href": "string (required)" } }
] } }"#;

#[test]
fn test_required_marker_legacy() -> Result<()> {
    let test = CliTest::with_registry(LINK_REGISTRY)?;
    test.write_file("src/Link.tsx", "interface LinkProps { href: string; }")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_required_marker_strict() -> Result<()> {
    let test = CliTest::with_registry(LINK_REGISTRY)?;
    test.write_file("src/Link.tsx", "interface LinkProps { href: string; }")?;

    assert_cmd_snapshot!(test.check_command().arg("--strict"));

    Ok(())
}

#[test]
fn test_verbose_output() -> Result<()> {
    let test = CliTest::with_registry(
        r#"{ "componentRegistry": { "ui": [
            { "name": "Ghost", "path": "@/Ghost" },
            { "name": "NoPath" }
        ] } }"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("-v"));

    Ok(())
}
