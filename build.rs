use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use phf_codegen::Map;
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};

include!("src/models/mod.rs");

const RESOURCES_FILE_NAME: &str = "compiled.gresources";
const UI_XML: &str = include_str!("resources/ui.xml");
const CATALOG_TOML: &str = include_str!("resources/catalog.toml");
const MANIFEST_TOML: &str = include_str!("Cargo.toml");
const RESOURCES_XML: &str = include_str!("resources/resources.gresource.xml.in");

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    output_dir: PathBuf,
    resources_dir: PathBuf,
    images_dir: PathBuf,
    catalog_file: PathBuf,
    resources_xml_file: PathBuf,
    compiled_resources_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let resources_dir = root.join("resources");
        let images_dir = resources_dir.join("images");
        let output_dir = PathBuf::from(std::env::var("OUT_DIR").context("OUT_DIR is not set")?);
        let catalog_file = output_dir.join("catalog.rs");
        let resources_xml_file = output_dir.join("resources.xml");
        let compiled_resources_file = output_dir.join(RESOURCES_FILE_NAME);

        Ok(Self {
            output_dir,
            resources_dir,
            images_dir,
            catalog_file,
            resources_xml_file,
            compiled_resources_file,
        })
    }
}

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    id: String,
    prefix: String,
    title: String,
    author: String,
    contact_number: String,
    featured_product: String,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let name = env!("CARGO_PKG_NAME");
        let description = env!("CARGO_PKG_DESCRIPTION");
        let version = env!("CARGO_PKG_VERSION");

        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let metadata = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?
            .get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        let id = Self::extract_string(metadata, "id")?;
        let prefix = Self::extract_string(metadata, "prefix")?;
        let title = Self::extract_string(metadata, "title")?;
        let author = Self::extract_string(metadata, "author")?;
        let contact_number = Self::extract_string(metadata, "contact-number")?;
        let featured_product = Self::extract_string(metadata, "featured-product")?;

        Self::validate_contact_number(&contact_number)?;

        Ok(Self {
            name,
            description,
            version,
            id,
            prefix,
            title,
            author,
            contact_number,
            featured_product,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .context(format!("Key '{key}' is missing or not a string"))
    }

    fn validate_contact_number(number: &str) -> Result<()> {
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            bail!("[package.metadata] contact-number must be a non-empty string of digits, got '{number}'");
        }
        Ok(())
    }

    fn validate_featured_product(&self, products: &[Product]) -> Result<()> {
        if !products.iter().any(|product| product.id == self.featured_product) {
            bail!("[package.metadata] featured-product '{}' is not in the catalog", self.featured_product);
        }
        Ok(())
    }
}

// ===== CATALOG READER =====

struct CatalogReader;

impl CatalogReader {
    fn read_products() -> Result<Vec<Product>> {
        let document: toml::Value = toml::from_str(CATALOG_TOML)
            .context("Failed to parse resources/catalog.toml")?;

        let entries = document.get("products")
            .context("catalog.toml has no [[products]] tables")?
            .as_array()
            .context("'products' in catalog.toml is not an array of tables")?;

        let products = entries.iter()
            .enumerate()
            .map(|(index, entry)| {
                Self::read_product(entry).context(format!("Invalid product at position {index}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::ensure_unique_ids(&products)?;
        Ok(products)
    }

    fn read_product(entry: &toml::Value) -> Result<Product> {
        let id = Self::read_non_empty_string(entry, "id")?;
        let name = Self::read_non_empty_string(entry, "name")?;
        let description = Self::read_string(entry, "description")?;
        let image = Self::read_string(entry, "image")?;
        let price = Self::read_price(entry)?;
        let tags = Self::read_tags(entry)?;

        Ok(Product { id, name, description, price, image, tags })
    }

    fn read_string(entry: &toml::Value, key: &str) -> Result<String> {
        entry.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .context(format!("Key '{key}' is missing or not a string"))
    }

    fn read_non_empty_string(entry: &toml::Value, key: &str) -> Result<String> {
        let value = Self::read_string(entry, key)?;
        if value.trim().is_empty() {
            bail!("Key '{key}' must not be empty");
        }
        Ok(value)
    }

    fn read_price(entry: &toml::Value) -> Result<u64> {
        let price = entry.get("price")
            .context("Key 'price' is missing")?
            .as_integer()
            .context("Key 'price' must be an integer amount of whole rupees")?;

        u64::try_from(price).map_err(|_| anyhow::anyhow!("Key 'price' must not be negative, got {price}"))
    }

    fn read_tags(entry: &toml::Value) -> Result<Vec<String>> {
        let Some(tags) = entry.get("tags") else {
            return Ok(Vec::new());
        };

        tags.as_array()
            .context("Key 'tags' is not an array")?
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_str()
                    .map(|s| s.to_string())
                    .context(format!("Tag at index {i} is not a string"))
            })
            .collect()
    }

    fn ensure_unique_ids(products: &[Product]) -> Result<()> {
        let mut seen = HashSet::new();
        for product in products {
            if !seen.insert(product.id.as_str()) {
                bail!("Duplicate product id '{id}' in catalog.toml", id = product.id);
            }
        }
        Ok(())
    }
}

// ===== CATALOG CODE BUILDER =====

struct CatalogCodeBuilder;

impl CatalogCodeBuilder {
    fn format_phf_hash_map(map: &HashMap<&str, usize>) -> String {
        let mut phf_builder = Map::new();
        for (key, value) in map {
            phf_builder.entry(*key, value.to_string());
        }

        phf_builder.build().to_string()
    }

    fn format_product_struct(product: &Product) -> String {
        format!(
            "Product {{
                id: {id:?},
                name: {name:?},
                description: {description:?},
                price: {price},
                image: {image:?},
                tags: &{tags:?}
            }}",
            id = product.id,
            name = product.name,
            description = product.description,
            price = product.price,
            image = product.image,
            tags = product.tags
        )
    }

    fn build_catalog_struct_code(products: &[Product]) -> String {
        let products_index: HashMap<&str, usize> = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.id.as_str(), index))
            .collect();

        let products_map = Self::format_phf_hash_map(&products_index);
        let products_array = products.iter()
            .map(Self::format_product_struct)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Catalog {{
                products: &[{products_array}],
                products_map: {products_map}
            }}"
        )
    }
}

// ===== IMAGE COLLECTOR =====

struct ImageCollector<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> ImageCollector<'a> {
    fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn build_images_resources_xml(&self, products: &[Product]) -> String {
        let mut seen = HashSet::new();

        products.iter()
            .filter(|product| seen.insert(product.image.as_str()))
            .filter_map(|product| self.bundled_image_entry(&product.image))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn bundled_image_entry(&self, image: &str) -> Option<String> {
        if self.config.images_dir.join(image).is_file() {
            Some(format!("<file alias=\"{image}\">images/{image}</file>"))
        } else {
            println!("cargo:warning=Product image 'resources/images/{image}' not found, it will render empty");
            None
        }
    }
}

// ===== UI TEMPLATES =====

/// Composite templates split out of `ui.xml`, one `.ui` file per widget
/// class, keyed by the snake_case class name.
struct UiTemplates {
    files: BTreeMap<String, String>,
}

impl UiTemplates {
    fn split(ui_xml: &str) -> Result<Self> {
        let template_regex = Regex::new(r#"(?s)<template\s+class="([^"]+)"[^>]*>.*?</template>"#)?;

        let files = template_regex
            .captures_iter(ui_xml)
            .filter_map(|capture| {
                let class = capture.get(1)?.as_str();
                let body = capture.get(0)?.as_str();
                Some((heck::AsSnakeCase(class).to_string(), body.to_string()))
            })
            .collect::<BTreeMap<_, _>>();

        if files.is_empty() {
            bail!("resources/ui.xml declares no <template> elements");
        }

        Ok(Self { files })
    }

    fn write_to(&self, directory: &Path) -> Result<()> {
        for (name, body) in &self.files {
            let document = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<interface>{body}</interface>");
            std::fs::write(directory.join(format!("{name}.ui")), document)
                .with_context(|| format!("Failed to write template {name}.ui"))?;
        }
        Ok(())
    }

    fn manifest_entries(&self) -> String {
        self.files
            .keys()
            .map(|name| format!("<file compressed=\"true\" preprocess=\"xml-stripblanks\">{name}.ui</file>"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ===== RESOURCE MANIFEST =====

/// `resources.gresource.xml.in` with its placeholders filled in.
struct ResourceManifest {
    xml: String,
}

impl ResourceManifest {
    fn render(prefix: &str, templates: &str, images: &str) -> Result<Self> {
        let xml = [("@APP_PREFIX@", prefix, 2), ("@APP_TEMPLATES@", templates, 1), ("@APP_IMAGES@", images, 1)]
            .into_iter()
            .try_fold(RESOURCES_XML.to_string(), |xml, (placeholder, value, expected)| {
                Self::fill(&xml, placeholder, value, expected)
            })?;

        Ok(Self { xml })
    }

    fn fill(xml: &str, placeholder: &str, value: &str, expected: usize) -> Result<String> {
        let found = xml.matches(placeholder).count();
        if found != expected {
            bail!("resources.gresource.xml.in must contain {placeholder} {expected} time(s), found {found}");
        }
        Ok(xml.replace(placeholder, value))
    }

    fn compile(&self, config: &BuildConfiguration) -> Result<()> {
        std::fs::write(&config.resources_xml_file, &self.xml)
            .context("Failed to write resources xml")?;

        glib_build_tools::compile_resources(
            &[config.output_dir.as_path(), config.resources_dir.as_path()],
            config.resources_xml_file.to_str().context("Resources xml path is not UTF-8")?,
            config.compiled_resources_file.to_str().context("Compiled resources path is not UTF-8")?,
        );

        Ok(())
    }
}

// ===== CARGO DIRECTIVES =====

struct CargoDirectives;

impl CargoDirectives {
    fn announce_runtime_cfg() {
        for directive in [
            "rustc-check-cfg=cfg(runtime)",
            "rustc-cfg=runtime",
            "rerun-if-changed=build.rs",
            "rerun-if-changed=resources",
        ] {
            println!("cargo:{directive}");
        }
    }

    fn export_environment(metadata: &ApplicationMetadata, compiled_resources: &Path) {
        let compiled_resources = compiled_resources.display().to_string();
        let variables = [
            ("APP_NAME", metadata.name),
            ("APP_DESCRIPTION", metadata.description),
            ("APP_VERSION", metadata.version),
            ("APP_ID", metadata.id.as_str()),
            ("APP_PREFIX", metadata.prefix.as_str()),
            ("APP_TITLE", metadata.title.as_str()),
            ("APP_AUTHOR", metadata.author.as_str()),
            ("APP_CONTACT_NUMBER", metadata.contact_number.as_str()),
            ("APP_FEATURED_PRODUCT", metadata.featured_product.as_str()),
            ("APP_RESOURCES", compiled_resources.as_str()),
        ];

        for (name, value) in variables {
            println!("cargo:rustc-env={name}={value}");
        }
    }
}

// ===== BUILD PIPELINE =====

struct BuildPipeline {
    config: BuildConfiguration,
    app_metadata: ApplicationMetadata,
}

impl BuildPipeline {
    fn new() -> Result<Self> {
        Ok(Self {
            config: BuildConfiguration::new()?,
            app_metadata: ApplicationMetadata::extract_from_cargo()?,
        })
    }

    fn run(&self) -> Result<()> {
        CargoDirectives::announce_runtime_cfg();

        let products = CatalogReader::read_products()?;
        self.app_metadata.validate_featured_product(&products)?;
        self.write_catalog_code(&products)?;

        let templates = UiTemplates::split(UI_XML)?;
        templates.write_to(&self.config.output_dir)?;

        let images = ImageCollector::new(&self.config).build_images_resources_xml(&products);
        ResourceManifest::render(&self.app_metadata.prefix, &templates.manifest_entries(), &images)?
            .compile(&self.config)?;

        CargoDirectives::export_environment(&self.app_metadata, &self.config.compiled_resources_file);
        Ok(())
    }

    fn write_catalog_code(&self, products: &[Product]) -> Result<()> {
        let catalog_code = CatalogCodeBuilder::build_catalog_struct_code(products);
        std::fs::write(&self.config.catalog_file, catalog_code)
            .context("Failed to write catalog file")
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.run()
}
