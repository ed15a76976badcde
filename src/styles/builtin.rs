use crate::styles::types::{
    CameraBias, LightingBias, MaterialBias, PromptBundle, RenderingLanguage, StylePreset,
};

const PREVIEW_BASE: &str = "https://images.unsplash.com";
const PREVIEW_QUERY: &str = "auto=format&fit=crop&w=600&q=80";

struct Bundle<'a> {
    vocabulary: &'a [&'a str],
    materials: (&'a [&'a str], &'a [&'a str], &'a [&'a str]),
    lighting: (&'a [&'a str], &'a [&'a str]),
    camera: (&'a [&'a str], &'a [&'a str]),
    rendering: (&'a [&'a str], &'a [&'a str], &'a [&'a str]),
}

fn preset(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    photo: &str,
    bundle: Bundle<'_>,
) -> StylePreset {
    let (primary, secondary, avoid) = bundle.materials;
    let (preferred, lighting_avoid) = bundle.lighting;
    let (angles, framing) = bundle.camera;
    let (quality, atmosphere, detail) = bundle.rendering;

    StylePreset {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        preview_url: Some(format!("{PREVIEW_BASE}/{photo}?{PREVIEW_QUERY}")),
        prompt_bundle: PromptBundle {
            material_bias: MaterialBias::from_phrases(primary, secondary, avoid),
            lighting_bias: LightingBias::from_phrases(preferred, lighting_avoid),
            camera_bias: CameraBias::from_phrases(angles, framing),
            rendering_language: RenderingLanguage::from_phrases(quality, atmosphere, detail),
            ..PromptBundle::with_vocabulary(bundle.vocabulary)
        },
    }
}

/// The presets shipped with the editor, in display order. The first entry is
/// the catalog default.
pub fn built_in_styles() -> Vec<StylePreset> {
    vec![
        preset(
            "contemporary-minimalist",
            "Contemporary Minimalist",
            "Residential",
            "Clean lines, neutral palettes, emphasis on light and space",
            "photo-1600607687939-ce8a6c25118c",
            Bundle {
                vocabulary: &[
                    "clean lines",
                    "minimal ornamentation",
                    "open plan",
                    "floating planes",
                    "cubic forms",
                ],
                materials: (
                    &["white plaster", "floor-to-ceiling glass", "polished concrete"],
                    &["warm oak accents", "matte black steel", "marble"],
                    &["ornate details", "clutter", "heavy textures"],
                ),
                lighting: (
                    &["soft natural light", "diffused daylight", "ambient occlusion"],
                    &["harsh direct sun", "colored lights"],
                ),
                camera: (&["eye-level", "two-point perspective"], &["rule of thirds", "balanced"]),
                rendering: (
                    &["photorealistic", "archviz", "unreal engine 5"],
                    &["serene", "sophisticated", "airy"],
                    &["crisp edges", "high fidelity"],
                ),
            },
        ),
        preset(
            "brutalist",
            "Neo-Brutalist",
            "Cultural",
            "Raw concrete, massive forms, honest materiality",
            "photo-1533630764724-5c9a633a6967",
            Bundle {
                vocabulary: &[
                    "massive forms",
                    "monolithic",
                    "geometric",
                    "raw materiality",
                    "heavy volumes",
                ],
                materials: (
                    &["exposed concrete", "raw timber", "beton brut"],
                    &["weathered steel", "glass", "rough stone"],
                    &["polished surfaces", "delicate details", "paint"],
                ),
                lighting: (
                    &["dramatic shadows", "contrast", "volumetric fog"],
                    &["flat lighting", "overexposed"],
                ),
                camera: (&["low angle", "worm-eye"], &["monumental", "imposing"]),
                rendering: (
                    &["cinematic", "8k"],
                    &["imposing", "atmospheric", "moody"],
                    &["concrete texture", "imperfections"],
                ),
            },
        ),
        preset(
            "parametric",
            "Parametric Fluidity",
            "Conceptual",
            "Organic forms, flowing geometries, computational aesthetics",
            "photo-1541888946425-d81bb19240f5",
            Bundle {
                vocabulary: &[
                    "organic curves",
                    "parametric facade",
                    "flowing geometry",
                    "biomimetic",
                    "voronoi pattern",
                ],
                materials: (
                    &["white corian", "curved glass", "fiberglass"],
                    &["perforated metal", "fiber composites", "carbon fiber"],
                    &["rectilinear", "brick", "sharp corners"],
                ),
                lighting: (
                    &["soft gradients", "ambient glow", "caustics"],
                    &["hard shadows", "darkness"],
                ),
                camera: (&["aerial", "dynamic", "curved"], &["fluid", "sweeping"]),
                rendering: (
                    &["high-end render", "corona render"],
                    &["futuristic", "ethereal", "motion"],
                    &["smooth surfaces", "seamless"],
                ),
            },
        ),
        preset(
            "vernacular",
            "Modern Vernacular",
            "Residential",
            "Local materials, traditional forms, modern interpretation",
            "photo-1512917774080-9991f1c4c750",
            Bundle {
                vocabulary: &[
                    "gabled roof",
                    "local adaptation",
                    "warm tones",
                    "tactile",
                    "pitched roof",
                ],
                materials: (
                    &["brick", "stone", "wood siding"],
                    &["copper", "slate", "clay tiles"],
                    &["high-tech", "plastic", "chrome"],
                ),
                lighting: (
                    &["golden hour", "warm interior glow", "dappled light"],
                    &["cool blue tones", "neon"],
                ),
                camera: (&["eye-level", "approachable"], &["contextual", "landscaped"]),
                rendering: (
                    &["architectural photography"],
                    &["inviting", "cozy", "homely"],
                    &["material richness", "texture"],
                ),
            },
        ),
        preset(
            "scandinavian",
            "Scandinavian",
            "Residential",
            "Hygge, light woods, functional simplicity, cozy",
            "photo-1595515106967-14348984f548",
            Bundle {
                vocabulary: &[
                    "simple forms",
                    "functionalism",
                    "hygge",
                    "connection to nature",
                ],
                materials: (
                    &["pine wood", "white walls", "light timber"],
                    &["wool", "linen", "glass"],
                    &["dark heavy woods", "baroque", "clutter"],
                ),
                lighting: (&["diffused north light", "bright interiors"], &["dark corners"]),
                camera: (&["interior", "eye-level"], &["intimate"]),
                rendering: (&["magazine style"], &["cozy", "clean", "bright"], &["soft textures"]),
            },
        ),
        preset(
            "industrial-loft",
            "Industrial Loft",
            "Commercial",
            "Exposed structure, brick, metal, repurposed spaces",
            "photo-1623631484762-b9b53239a3f2",
            Bundle {
                vocabulary: &[
                    "adaptive reuse",
                    "open ceilings",
                    "large windows",
                    "structural honesty",
                ],
                materials: (
                    &["exposed brick", "steel beams", "polished concrete"],
                    &["ductwork", "distressed leather", "black metal"],
                    &["plaster", "carpet", "pastels"],
                ),
                lighting: (&["large daylighting", "edison bulbs"], &["clinical light"]),
                camera: (&["wide angle"], &["spacious"]),
                rendering: (&["photorealistic"], &["urban", "raw", "gritty"], &["rust", "patina"]),
            },
        ),
        preset(
            "biophilic",
            "Biophilic Design",
            "Sustainable",
            "Integration of nature, living walls, natural light",
            "photo-1518531933037-91b2f5f229cc",
            Bundle {
                vocabulary: &[
                    "vertical gardens",
                    "indoor-outdoor flow",
                    "organic patterns",
                    "nature integration",
                ],
                materials: (
                    &["living walls", "natural wood", "stone"],
                    &["water features", "bamboo", "glass"],
                    &["synthetic materials", "sterile surfaces"],
                ),
                lighting: (&["dappled sunlight", "skylights"], &["artificial glare"]),
                camera: (&["eye-level"], &["immersed in green"]),
                rendering: (
                    &["vibrant"],
                    &["lush", "restorative", "fresh"],
                    &["foliage", "organic textures"],
                ),
            },
        ),
        preset(
            "mid-century",
            "Mid-Century Modern",
            "Residential",
            "Retro-futurism, organic curves, contrasting textures",
            "photo-1598928506311-c55ded91a20c",
            Bundle {
                vocabulary: &[
                    "cantilevered",
                    "flat planes",
                    "integration with landscape",
                    "retro aesthetic",
                ],
                materials: (
                    &["teak", "glass", "stone fireplace"],
                    &["brass", "terrazzo", "pops of color"],
                    &["ornamentation", "clutter"],
                ),
                lighting: (&["warm sunlight", "globe lights"], &["cool LEDs"]),
                camera: (&["eye-level", "low angle"], &["horizontal"]),
                rendering: (
                    &["cinematic", "vintage feel"],
                    &["nostalgic", "stylish"],
                    &["wood grain"],
                ),
            },
        ),
        preset(
            "japanese-zen",
            "Japanese Zen",
            "Cultural",
            "Minimalism, natural materials, shadow and light, serenity",
            "photo-1522771759335-5028489708b7",
            Bundle {
                vocabulary: &[
                    "engawa",
                    "shoji screens",
                    "minimalist",
                    "connection to garden",
                ],
                materials: (
                    &["hinoki wood", "tatami", "plaster"],
                    &["river stones", "paper", "bamboo"],
                    &["clutter", "bright plastic"],
                ),
                lighting: (&["diffused soft light", "shadow play"], &["direct harsh light"]),
                camera: (&["low angle", "interior"], &["framed views", "asymmetry"]),
                rendering: (
                    &["photorealistic"],
                    &["peaceful", "meditative", "quiet"],
                    &["texture focus"],
                ),
            },
        ),
        preset(
            "cyberpunk",
            "Cyberpunk",
            "Conceptual",
            "High-tech low-life, neon, dystopian, metallic",
            "photo-1515630278258-407f66498911",
            Bundle {
                vocabulary: &["megastructure", "dense urban", "high-tech", "dystopian"],
                materials: (
                    &["metal", "glass", "concrete"],
                    &["holograms", "wires", "neon signs"],
                    &["wood", "nature", "clean"],
                ),
                lighting: (
                    &["neon pink", "cyan glow", "rain reflections"],
                    &["daylight", "warm white"],
                ),
                camera: (&["aerial", "street level"], &["crowded", "vertical"]),
                rendering: (
                    &["digital art", "octane render"],
                    &["dark", "gritty", "electric"],
                    &["rain", "reflections"],
                ),
            },
        ),
        preset(
            "bauhaus",
            "Bauhaus",
            "Cultural",
            "Form follows function, primary colors, simple geometry",
            "photo-1589923188900-85dae5233271",
            Bundle {
                vocabulary: &["geometric", "functionalism", "asymmetry", "industrial"],
                materials: (
                    &["white stucco", "steel", "glass"],
                    &["primary color accents", "concrete"],
                    &["decoration", "ornament"],
                ),
                lighting: (&["clear daylight", "studio lighting"], &["moody"]),
                camera: (&["axonometric", "front"], &["balanced"]),
                rendering: (&["clean"], &["rational", "modern"], &["sharp lines"]),
            },
        ),
        preset(
            "tropical-modern",
            "Tropical Modernism",
            "Residential",
            "Open air, overhangs, concrete and wood, lush context",
            "photo-1516455590571-18256e5bb9ff",
            Bundle {
                vocabulary: &[
                    "large overhangs",
                    "passive ventilation",
                    "open spaces",
                    "breeze blocks",
                ],
                materials: (
                    &["concrete", "tropical hardwood", "stone"],
                    &["water", "vegetation"],
                    &["glass curtain wall", "insulation"],
                ),
                lighting: (&["bright sun", "deep shade"], &["overcast"]),
                camera: (&["eye-level"], &["surrounded by nature"]),
                rendering: (&["vivid"], &["humid", "lush", "relaxed"], &["foliage shadows"]),
            },
        ),
        preset(
            "alpine-chalet",
            "Alpine Chalet",
            "Residential",
            "Modern mountain home, snow, timber, warmth",
            "photo-1518732679287-35359b32975e",
            Bundle {
                vocabulary: &["steep roof", "panoramic windows", "mountain retreat"],
                materials: (
                    &["timber cladding", "slate", "stone base"],
                    &["glass", "fur", "fire"],
                    &["concrete block", "palm trees"],
                ),
                lighting: (&["warm interior light", "blue hour snow"], &["green cast"]),
                camera: (&["exterior"], &["landscape context"]),
                rendering: (
                    &["crisp"],
                    &["cold outside warm inside", "majestic"],
                    &["snow texture"],
                ),
            },
        ),
        preset(
            "desert-modern",
            "Desert Modernism",
            "Residential",
            "Blending with arid landscape, earth tones, horizontal lines",
            "photo-1523677462372-748980892095",
            Bundle {
                vocabulary: &[
                    "horizontal planes",
                    "earth shelter",
                    "arid landscape",
                    "shadow patterns",
                ],
                materials: (
                    &["rammed earth", "corten steel", "sandstone"],
                    &["glass", "succulents"],
                    &["green grass", "white plastic"],
                ),
                lighting: (&["hard sunlight", "long shadows"], &["diffused mist"]),
                camera: (&["eye-level"], &["wide landscape"]),
                rendering: (
                    &["high contrast"],
                    &["dry", "hot", "silent"],
                    &["sand grains", "heat haze"],
                ),
            },
        ),
    ]
}
