use std::collections::BTreeSet;
use std::fs;

use genrsrc::{generate, GenerateRequest};
use tempfile::TempDir;

use crate::integration::support::{
    declared_objects, extern_symbols, global_symbols, output_paths, test_config, write_files,
};

fn scenario(temp: &TempDir) -> GenerateRequest {
    let data = temp.path().join("data");
    write_files(
        &data,
        &[
            ("icons/a.png", b"\x89PNG-a"),
            ("icons/b.png", b"\x89PNG-bbbb"),
            ("font.ttf", b"ttf-bytes-here"),
        ],
    );
    let (asm, header) = output_paths(temp);
    GenerateRequest {
        resources: vec![
            "icons/a.png".to_string(),
            "icons/b.png".to_string(),
            "font.ttf".to_string(),
        ],
        asm_output: asm,
        header_output: header,
    }
}

#[test]
fn scenario_header_matches_expected_layout() {
    let temp = TempDir::new().unwrap();
    let request = scenario(&temp);
    let config = test_config(&temp.path().join("data"));

    generate(&request, &config).unwrap();
    let header = fs::read_to_string(&request.header_output).unwrap();

    let expected_body = [
        "namespace res {",
        "    namespace externals {",
        "\t\textern \"C\" const char r_icons_a_png[];",
        "\t\textern \"C\" const char r_icons_b_png[];",
        "\t\textern \"C\" const char r_font_ttf[];",
        "    }",
        "",
        "    namespace icons {",
        "        constexpr const Resource a_png(externals::r_icons_a_png, 6);",
        "        constexpr const Resource b_png(externals::r_icons_b_png, 9);",
        "    }",
        "    constexpr const Resource font_ttf(externals::r_font_ttf, 14);",
        "}",
    ]
    .join("\n");
    assert!(header.contains(&expected_body), "header was:\n{header}");
    assert!(header.starts_with("#ifndef _GENERATED_RESOURCES_H\n"));
    assert!(header.contains("#include \"core/Resource.h\"\n"));
    assert!(header.ends_with("#endif\n"));
}

#[test]
fn extern_declarations_match_assembly_globals() {
    let temp = TempDir::new().unwrap();
    let request = scenario(&temp);
    generate(&request, &test_config(&temp.path().join("data"))).unwrap();

    let asm = fs::read_to_string(&request.asm_output).unwrap();
    let header = fs::read_to_string(&request.header_output).unwrap();

    let globals = global_symbols(&asm);
    let externs = extern_symbols(&header);
    assert_eq!(globals, externs);
    assert_eq!(globals.len(), 3);

    let referenced: BTreeSet<String> =
        declared_objects(&header).into_iter().map(|(_, s, _)| s).collect();
    assert_eq!(referenced, globals.into_iter().collect::<BTreeSet<_>>());
}

#[test]
fn header_sizes_equal_file_sizes() {
    let temp = TempDir::new().unwrap();
    let request = scenario(&temp);
    let data = temp.path().join("data");
    let report = generate(&request, &test_config(&data)).unwrap();

    let header = fs::read_to_string(&request.header_output).unwrap();
    let objects = declared_objects(&header);
    assert_eq!(objects.len(), 3);

    for entry in &report.resources {
        let on_disk = fs::metadata(data.join(&entry.name)).unwrap().len();
        assert_eq!(entry.size, on_disk);
        let (_, _, declared) = objects.iter().find(|(_, s, _)| *s == entry.symbol).unwrap();
        assert_eq!(*declared, on_disk);
    }
}

#[test]
fn assembly_embeds_each_resource_with_terminator() {
    let temp = TempDir::new().unwrap();
    let request = scenario(&temp);
    generate(&request, &test_config(&temp.path().join("data"))).unwrap();

    let asm = fs::read_to_string(&request.asm_output).unwrap();
    assert!(asm.starts_with(".section .rodata\n"));
    assert!(asm.contains(
        "    .global r_icons_a_png\n    .align 4\nr_icons_a_png:\n    .incbin \"icons/a.png\"\n    .byte 0\n"
    ));
    assert_eq!(asm.matches(".byte 0").count(), 3);
    assert_eq!(asm.matches(".section").count(), 1);
}

#[test]
fn generation_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let request = scenario(&temp);
    let config = test_config(&temp.path().join("data"));

    generate(&request, &config).unwrap();
    let asm_first = fs::read(&request.asm_output).unwrap();
    let header_first = fs::read(&request.header_output).unwrap();

    generate(&request, &config).unwrap();
    assert_eq!(fs::read(&request.asm_output).unwrap(), asm_first);
    assert_eq!(fs::read(&request.header_output).unwrap(), header_first);
}

#[test]
fn input_order_changes_namespace_order_unless_sorted() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    write_files(&data, &[("b/x.bin", b"x"), ("a/y.bin", b"y")]);
    let (asm, header) = output_paths(&temp);

    let forward = GenerateRequest {
        resources: vec!["b/x.bin".to_string(), "a/y.bin".to_string()],
        asm_output: asm.clone(),
        header_output: header.clone(),
    };
    let reversed = GenerateRequest {
        resources: vec!["a/y.bin".to_string(), "b/x.bin".to_string()],
        asm_output: asm,
        header_output: header,
    };

    let mut config = test_config(&data);
    generate(&forward, &config).unwrap();
    let text = fs::read_to_string(&forward.header_output).unwrap();
    assert!(text.find("namespace b {").unwrap() < text.find("namespace a {").unwrap());

    config.order = genrsrc::emit::EmissionOrder::Sorted;
    generate(&forward, &config).unwrap();
    let sorted_forward = fs::read_to_string(&forward.header_output).unwrap();
    generate(&reversed, &config).unwrap();
    let sorted_reversed = fs::read_to_string(&reversed.header_output).unwrap();

    let tree_of = |h: &str| h.split_once("    }\n\n").unwrap().1.to_string();
    assert_eq!(tree_of(&sorted_forward), tree_of(&sorted_reversed));
}

#[test]
fn flat_and_nested_names_shape_the_tree() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    write_files(&data, &[("a/b/c.bin", b"abc"), ("c.bin", b"c")]);
    let (asm, header) = output_paths(&temp);
    let request = GenerateRequest {
        resources: vec!["a/b/c.bin".to_string(), "c.bin".to_string()],
        asm_output: asm,
        header_output: header,
    };
    generate(&request, &test_config(&data)).unwrap();

    let text = fs::read_to_string(&request.header_output).unwrap();
    assert!(text.contains(
        "    namespace a {\n        namespace b {\n            constexpr const Resource c_bin(externals::r_a_b_c_bin, 3);\n        }\n    }\n    constexpr const Resource c_bin(externals::r_c_bin, 1);\n}"
    ));
}

#[test]
fn empty_file_and_empty_list_are_valid() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    write_files(&data, &[("empty.bin", b"")]);
    let (asm, header) = output_paths(&temp);

    let request = GenerateRequest {
        resources: vec!["empty.bin".to_string()],
        asm_output: asm.clone(),
        header_output: header.clone(),
    };
    let report = generate(&request, &test_config(&data)).unwrap();
    assert_eq!(report.resources[0].size, 0);
    let text = fs::read_to_string(&header).unwrap();
    assert!(text.contains("empty_bin(externals::r_empty_bin, 0);"));

    let request = GenerateRequest {
        resources: Vec::new(),
        asm_output: asm.clone(),
        header_output: header,
    };
    let report = generate(&request, &test_config(&data)).unwrap();
    assert!(report.resources.is_empty());
    assert_eq!(fs::read_to_string(&asm).unwrap(), ".section .rodata\n");
}

#[test]
fn later_search_directory_is_used_when_first_lacks_file() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first");
    let second = temp.path().join("second");
    write_files(&first, &[("shared.bin", b"1")]);
    write_files(&second, &[("shared.bin", b"22"), ("only.bin", b"333")]);
    let (asm, header) = output_paths(&temp);

    let mut config = test_config(&first);
    config.search.push(second);
    let request = GenerateRequest {
        resources: vec!["shared.bin".to_string(), "only.bin".to_string()],
        asm_output: asm,
        header_output: header,
    };
    let report = generate(&request, &config).unwrap();
    assert_eq!(report.resources[0].size, 1);
    assert_eq!(report.resources[1].size, 3);
}

#[test]
fn escape_policy_produces_valid_symbols() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    write_files(&data, &[("my-dir/hello world.txt", b"hi")]);
    let (asm, header) = output_paths(&temp);

    let mut config = test_config(&data);
    config.symbol_policy = genrsrc::symbol::SymbolPolicy::Escape;
    let request = GenerateRequest {
        resources: vec!["my-dir/hello world.txt".to_string()],
        asm_output: asm,
        header_output: header,
    };
    generate(&request, &config).unwrap();

    let text = fs::read_to_string(&request.header_output).unwrap();
    assert!(text.contains("namespace my_2ddir {"));
    assert!(text.contains("hello_20world_txt(externals::r_my_2ddir_hello_20world_txt, 2);"));
}

#[cfg(unix)]
#[test]
fn quoted_file_names_are_escaped_in_incbin() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    let name = "q\"uote\\n.bin";
    write_files(&data, &[(name, b"xyz")]);
    let (asm, header) = output_paths(&temp);

    let mut config = test_config(&data);
    config.symbol_policy = genrsrc::symbol::SymbolPolicy::Escape;
    let request = GenerateRequest {
        resources: vec![name.to_string()],
        asm_output: asm,
        header_output: header,
    };
    let report = generate(&request, &config).unwrap();
    assert_eq!(report.resources[0].symbol, "r_q_22uote_5cn_bin");

    let asm_text = fs::read_to_string(&request.asm_output).unwrap();
    assert!(asm_text.contains("    .incbin \"q\\\"uote\\\\n.bin\"\n"));
    assert_eq!(asm_text.matches(".incbin").count(), 1);
    assert_eq!(global_symbols(&asm_text), vec!["r_q_22uote_5cn_bin".to_string()]);
}
