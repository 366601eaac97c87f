//! End-to-end rewrite tests against a realistic seed file

mod common;

use common::{TestWorkspace, images_after, seed_rewriter_cmd, seed_rewriter_cmd_in};
use predicates::prelude::*;

const POOL_PREFIX: &str = "https://lh3.googleusercontent.com/aida-public/";

#[test]
fn test_rewrite_drops_disallowed_categories() {
    let workspace = TestWorkspace::new();
    workspace.init_from_fixture();

    seed_rewriter_cmd_in(&workspace.path)
        .args(["--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed: Giày da Oxford (category: giay)",
        ))
        .stdout(predicate::str::contains(
            "Removed: Túi tote (category: phu-kien)",
        ))
        .stdout(predicate::str::contains("Removed 2 products"))
        .stdout(predicate::str::contains("Kept 4 products"));

    let seed = workspace.read_seed();
    assert!(!seed.contains("Giày da Oxford"));
    assert!(!seed.contains("Túi tote"));
    assert!(seed.contains("Áo sơ mi Linen"));
    assert!(seed.contains("Áo khoác Bomber"));
    assert!(seed.contains("Quần ống rộng Taki"));
}

#[test]
fn test_rewrite_keeps_records_without_category() {
    let workspace = TestWorkspace::new();
    workspace.init_from_fixture();

    seed_rewriter_cmd_in(&workspace.path)
        .args(["--seed", "7"])
        .assert()
        .success();

    let seed = workspace.read_seed();
    assert!(seed.contains(r#"name: "Quần kaki 'Classic'","#));
    let images = images_after(&seed, "Quần kaki");
    assert_eq!(images[0], "https://img.example/kaki.jpg");
}

#[test]
fn test_rewrite_preserves_record_order_and_surroundings() {
    let workspace = TestWorkspace::new();
    let original = workspace.init_from_fixture();

    seed_rewriter_cmd_in(&workspace.path)
        .args(["--seed", "3"])
        .assert()
        .success();

    let seed = workspace.read_seed();
    let marker = "const products = [";
    let prefix = &original[..original.find(marker).unwrap()];
    assert!(seed.starts_with(prefix));
    assert!(seed.ends_with("\n]\n\nasync function seed() {\n  for (const product of products) {\n    console.log(product.name)\n  }\n}\n\nseed()\n"));

    let order = ["Áo sơ mi Linen", "Quần kaki", "Áo khoác Bomber", "Quần ống rộng Taki"];
    let positions: Vec<usize> = order.iter().map(|name| seed.find(name).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_rewrite_regenerates_image_lists() {
    let workspace = TestWorkspace::new();
    workspace.init_from_fixture();

    seed_rewriter_cmd_in(&workspace.path)
        .args(["--seed", "11"])
        .assert()
        .success();

    let seed = workspace.read_seed();

    let linen = images_after(&seed, "Áo sơ mi Linen");
    assert!((3..=5).contains(&linen.len()));
    assert_eq!(linen[0], "https://img.example/ao-so-mi-linen.jpg");
    assert!(linen[1..].iter().all(|u| u.starts_with(POOL_PREFIX)));
    assert!(!seed.contains("ao-so-mi-linen-2.jpg"));

    // no primary image: the list starts with the first pool entry
    let bomber = images_after(&seed, "Áo khoác Bomber");
    assert!((3..=5).contains(&bomber.len()));
    assert!(bomber[0].starts_with(POOL_PREFIX));
    assert!(!bomber[1..].contains(&bomber[0]));

    // nested values are untouched
    assert!(seed.contains("variants: [{ size: 'M', stock: { warehouse: 3 } }],"));
    assert!(seed.contains("colors: ['Beige', 'Trắng'],"));
}

#[test]
fn test_rewrite_leaves_records_without_images_field() {
    let workspace = TestWorkspace::new();
    workspace.init_from_fixture();

    seed_rewriter_cmd_in(&workspace.path)
        .args(["--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 product without an images field left unchanged",
        ));

    let seed = workspace.read_seed();
    assert!(seed.contains(
        "{\n    name: 'Quần ống rộng Taki',\n    slug: 'quan-ong-rong-taki',\n    image: 'https://img.example/taki.jpg',\n    category_slug: 'quan',\n    status: ProductStatus.Active\n  }"
    ));
}

#[test]
fn test_same_seed_produces_same_output() {
    let first = TestWorkspace::new();
    first.init_from_fixture();
    let second = TestWorkspace::new();
    second.init_from_fixture();

    for workspace in [&first, &second] {
        seed_rewriter_cmd_in(&workspace.path)
            .args(["--seed", "42"])
            .assert()
            .success();
    }

    assert_eq!(first.read_seed(), second.read_seed());
}

#[test]
fn test_rewrite_is_stable_when_run_twice() {
    let workspace = TestWorkspace::new();
    workspace.init_from_fixture();

    seed_rewriter_cmd_in(&workspace.path)
        .args(["--seed", "1"])
        .assert()
        .success();

    seed_rewriter_cmd_in(&workspace.path)
        .args(["--seed", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 0 products"))
        .stdout(predicate::str::contains("Kept 4 products"));

    let seed = workspace.read_seed();
    let linen = images_after(&seed, "Áo sơ mi Linen");
    assert!((3..=5).contains(&linen.len()));
    assert_eq!(linen[0], "https://img.example/ao-so-mi-linen.jpg");
}

#[test]
fn test_root_option_selects_project() {
    let workspace = TestWorkspace::new();
    workspace.write_file("be/src/utils/seed.ts", &common::fixture_seed());

    seed_rewriter_cmd()
        .arg("--root")
        .arg(workspace.path.join("be"))
        .args(["--seed", "1"])
        .assert()
        .success();

    assert!(!workspace.read_file("be/src/utils/seed.ts").contains("Túi tote"));
}

#[test]
fn test_file_option_overrides_root() {
    let workspace = TestWorkspace::new();
    workspace.init_from_fixture();
    workspace.write_file("other.ts", &common::fixture_seed());

    seed_rewriter_cmd()
        .arg("--root")
        .arg(&workspace.path)
        .arg("--file")
        .arg(workspace.path.join("other.ts"))
        .args(["--seed", "1"])
        .assert()
        .success();

    assert!(!workspace.read_file("other.ts").contains("Túi tote"));
    assert_eq!(workspace.read_seed(), common::fixture_seed());
}

#[test]
fn test_category_option_replaces_allowed_set() {
    let workspace = TestWorkspace::new();
    workspace.init_from_fixture();

    seed_rewriter_cmd_in(&workspace.path)
        .args(["--category", "giay", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 4 products"))
        .stdout(predicate::str::contains("Kept 2 products"));

    let seed = workspace.read_seed();
    assert!(seed.contains("Giày da Oxford"));
    assert!(seed.contains("Quần kaki"));
    assert!(!seed.contains("Áo sơ mi Linen"));
}

#[test]
fn test_config_file_controls_image_count() {
    let workspace = TestWorkspace::new();
    workspace.init_from_fixture();
    workspace.write_file(
        "seed-rewriter.yaml",
        "allowed_categories: [ao, quan, ao-khoac, giay, phu-kien]\nmin_images: 2\nmax_images: 2\nimage_pool:\n  - https://cdn.example/a.jpg\n  - https://cdn.example/b.jpg\n  - https://cdn.example/c.jpg\n",
    );

    seed_rewriter_cmd_in(&workspace.path)
        .args(["--config", "seed-rewriter.yaml", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 0 products"));

    let seed = workspace.read_seed();
    let giay = images_after(&seed, "Giày da Oxford");
    assert_eq!(giay.len(), 2);
    assert_eq!(giay[0], "https://img.example/giay.jpg");
    assert!(giay[1].starts_with("https://cdn.example/"));

    let bomber = images_after(&seed, "Áo khoác Bomber");
    assert_eq!(bomber[0], "https://cdn.example/a.jpg");
    assert_ne!(bomber[1], bomber[0]);
}

#[test]
fn test_rewrite_handles_regex_literals_in_records() {
    let workspace = TestWorkspace::new();
    workspace.write_seed(
        "const products = [\n  {\n    name: 'Áo thun',\n    category_slug: 'ao',\n    image: 'https://img.example/thun.jpg',\n    images: ['https://img.example/thun.jpg'],\n    sku: /it's-[0-9]+/\n  },\n  {\n    name: 'Giày',\n    category_slug: 'giay'\n  }\n]\n",
    );

    seed_rewriter_cmd_in(&workspace.path)
        .args(["--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: Giày (category: giay)"));

    let seed = workspace.read_seed();
    assert!(seed.contains("sku: /it's-[0-9]+/"));
    let images = images_after(&seed, "Áo thun");
    assert!((3..=5).contains(&images.len()));
    assert_eq!(images[0], "https://img.example/thun.jpg");
}

#[test]
fn test_syntax_error_in_records_leaves_file_untouched() {
    let workspace = TestWorkspace::new();
    let content = "const products = [\n  { name: 'A', category_slug: 'ao' images: [] },\n  { name: 'B', category_slug: 'giay' }\n]\n";
    workspace.write_seed(content);

    seed_rewriter_cmd_in(&workspace.path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));

    assert_eq!(workspace.read_seed(), content);
}
