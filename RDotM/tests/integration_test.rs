use pretty_assertions::assert_eq;
use rdotm::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

#[test]
fn test_parse_values_file() {
    let fragment = parse_values_file(testdata("res").join("values").join("strings.xml"));
    assert_eq!(fragment.status, FragmentStatus::Parsed);

    let strings = &fragment.resources.strings;
    assert_eq!(strings.len(), 2);
    assert_eq!(strings[0].name, "title_main");
    assert_eq!(strings[0].raw_value, "Main");
    assert_eq!(strings[1].name, "label_next");
    assert_eq!(strings[1].raw_value, "Next");
}

#[test]
fn test_missing_and_empty_files_look_the_same() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty.xml");
    fs::write(&empty, "<resources>\n    <dimen name=\"margin\">16dp</dimen>\n</resources>\n").unwrap();

    let missing = parse_values_file("invalid");
    let parsed = parse_values_file(&empty);

    assert_eq!(missing.resources, Resources::new());
    assert_eq!(parsed.resources, Resources::new());
    // Only the status tells them apart
    assert!(missing.is_failed());
    assert!(!parsed.is_failed());
}

#[test]
fn test_collect_values_merges_in_file_order() {
    let scan = collect_values(testdata("res"));

    let files: Vec<_> = scan
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files, ["colors.xml", "integers.xml", "strings.xml"]);
    assert!(scan.failed.is_empty());

    let resources = &scan.resources;
    assert_eq!(resources.len(), 7);
    let colors: Vec<_> = resources.colors.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(colors, ["primary", "overlay", "white"]);
    let integers: Vec<_> = resources
        .integers
        .iter()
        .map(|e| (e.name.as_str(), e.raw_value.as_str()))
        .collect();
    assert_eq!(integers, [("min_length_age", "1"), ("max_length_name", "20")]);
    assert!(resources.drawables.is_empty());
}

#[test]
fn test_same_name_in_two_files_is_kept_twice() {
    let scan = collect_values(testdata("res2"));

    assert_eq!(scan.failed.len(), 1);
    assert!(scan.failed[0].ends_with("broken.xml"));

    let titles: Vec<_> = scan
        .resources
        .strings
        .iter()
        .filter(|e| e.name == "title")
        .map(|e| e.raw_value.as_str())
        .collect();
    assert_eq!(titles, ["Base title", "Extra title"]);
    // Nothing from the malformed file survives
    assert!(scan.resources.strings.iter().all(|e| e.name != "lost"));
}

#[test]
fn test_collect_resources_with_drawables() {
    let scan = collect_resources(testdata("res"), true);
    let drawables: Vec<_> = scan.resources.drawables.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(drawables, ["ic_launcher"]);
}

#[test]
fn test_generate_res() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    let options = GenerateOptions::new(testdata("res"), &out);

    let summary = generate(&options).unwrap();
    assert_eq!(summary.files_scanned, 3);
    assert_eq!((summary.strings, summary.colors, summary.integers), (2, 3, 0));
    assert!(summary.skipped.is_empty());

    let header = fs::read_to_string(out.join("R.h")).unwrap();
    assert_eq!(
        header,
        "// DO NOT EDIT.
// This file is automatically generated by rdotm tool.
// https://github.com/ksoichiro/rdotm

#import <UIKit/UIKit.h>

@interface R : NSObject

+ (NSString *)string_title_main;
+ (NSString *)string_label_next;
+ (UIColor *)color_primary;
+ (UIColor *)color_overlay;
+ (UIColor *)color_white;

@end
"
    );

    let implementation = fs::read_to_string(out.join("R.m")).unwrap();
    assert_eq!(
        implementation,
        "// DO NOT EDIT.
// This file is automatically generated by rdotm tool.
// https://github.com/ksoichiro/rdotm

#import \"R.h\"

@implementation R

+ (NSString *)string_title_main { return @\"Main\"; }
+ (NSString *)string_label_next { return @\"Next\"; }
+ (UIColor *)color_primary { return [UIColor colorWithRed:63/255.0 green:81/255.0 blue:181/255.0 alpha:255/255.0]; }
+ (UIColor *)color_overlay { return [UIColor colorWithRed:0/255.0 green:0/255.0 blue:0/255.0 alpha:128/255.0]; }
+ (UIColor *)color_white { return [UIColor colorWithRed:255/255.0 green:255/255.0 blue:255/255.0 alpha:255/255.0]; }

@end
"
    );
}

#[test]
fn test_generate_res2_contains_failures() {
    let dir = tempdir().unwrap();
    let options = GenerateOptions::new(testdata("res2"), dir.path()).with_class_name("Res");

    let summary = generate(&options).unwrap();
    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.files_failed, 1);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].name, "bad_color");
    assert_eq!(summary.skipped[0].kind, ResourceKind::Color);

    let implementation = fs::read_to_string(dir.path().join("Res.m")).unwrap();
    assert!(implementation.contains("+ (NSString *)string_quote { return @\"Say \\\"hi\\\"\"; }\n"));
    assert!(implementation.contains(
        "+ (UIColor *)color_accent { return [UIColor colorWithRed:255/255.0 green:0/255.0 blue:170/255.0 alpha:136/255.0]; }\n"
    ));
    assert_eq!(implementation.matches("+ (NSString *)string_title {").count(), 2);
    assert!(!implementation.contains("bad_color"));
    assert!(!fs::read_to_string(dir.path().join("Res.h")).unwrap().contains("bad_color"));
}

#[test]
fn test_generate_with_extensions() {
    let dir = tempdir().unwrap();
    let options = GenerateOptions::new(testdata("res"), dir.path())
        .with_integers(true)
        .with_drawables(true);

    let summary = generate(&options).unwrap();
    assert_eq!(summary.accessor_count(), 2 + 3 + 2 + 1);

    let header = fs::read_to_string(options.header_path()).unwrap();
    assert!(header.ends_with(
        "+ (NSInteger)integer_min_length_age;
+ (NSInteger)integer_max_length_name;
+ (UIImage *)drawable_ic_launcher;

@end
"
    ));
}

#[test]
fn test_round_trip_order() {
    let dir = tempdir().unwrap();
    let values = dir.path().join("res").join("values");
    fs::create_dir_all(&values).unwrap();
    fs::write(
        values.join("strings.xml"),
        r#"<resources><string name="title_main">Main</string><string name="label_next">Next</string></resources>"#,
    )
    .unwrap();

    let options = GenerateOptions::new(dir.path().join("res"), dir.path().join("out"));
    generate(&options).unwrap();

    let implementation = fs::read_to_string(options.implementation_path()).unwrap();
    let main = implementation.find("{ return @\"Main\"; }").unwrap();
    let next = implementation.find("{ return @\"Next\"; }").unwrap();
    assert!(main < next);
}

#[test]
fn test_clean_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    let options = GenerateOptions::new(testdata("res"), &out)
        .with_clean(true)
        .with_integers(true);

    generate(&options).unwrap();
    let first = (
        fs::read(options.header_path()).unwrap(),
        fs::read(options.implementation_path()).unwrap(),
    );
    generate(&options).unwrap();
    let second = (
        fs::read(options.header_path()).unwrap(),
        fs::read(options.implementation_path()).unwrap(),
    );

    assert_eq!(first, second);
}

#[test]
fn test_empty_res_dir_still_generates() {
    let dir = tempdir().unwrap();
    let options = GenerateOptions::new(dir.path().join("missing"), dir.path().join("out"));

    let summary = generate(&options).unwrap();
    assert_eq!(summary.accessor_count(), 0);
    assert_eq!(summary.files_scanned, 0);
    assert!(options.header_path().is_file());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let options = GenerateOptions::new(testdata("res"), blocker.join("out"));
    let err = generate(&options).unwrap_err();
    assert!(matches!(err, Error::Output { .. }), "{err:?}");
}
