//! Static marketing content.
//!
//! Everything the about page and home-page sections render: site identity,
//! the "why choose us" features, NFT explainer, and the about-us copy. All of
//! it is fixed at compile time, so it lives in one `static`.

/// A titled feature blurb with an icon name the UI maps to a glyph.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Explainer copy for the NFT category.
#[derive(Debug, Clone, Copy)]
pub struct NftInfo {
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

/// A team member on the about page.
#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

/// About-us copy.
#[derive(Debug, Clone, Copy)]
pub struct AboutUs {
    pub story: &'static str,
    pub mission: &'static str,
    pub vision: &'static str,
    pub values: &'static [Feature],
    pub team: &'static [TeamMember],
}

/// The full static site content.
#[derive(Debug, Clone, Copy)]
pub struct SiteContent {
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub why_choose_us: &'static [Feature],
    pub nft_info: NftInfo,
    pub about: AboutUs,
}

/// The site content.
#[must_use]
pub const fn site() -> &'static SiteContent {
    &SITE
}

static SITE: SiteContent = SiteContent {
    site_name: "NextGen Marketplace",
    tagline: "The Future of E-commerce",
    why_choose_us: &[
        Feature {
            icon: "zap",
            title: "Lightning Fast",
            description: "Experience blazing fast loading times and seamless navigation with our \
                          optimized platform.",
        },
        Feature {
            icon: "shield",
            title: "Secure & Safe",
            description: "Your data and transactions are protected with enterprise-grade security \
                          measures.",
        },
        Feature {
            icon: "truck",
            title: "Free Shipping",
            description: "Enjoy free shipping on all orders with fast delivery to your doorstep.",
        },
        Feature {
            icon: "star",
            title: "Premium Quality",
            description: "Every product is carefully curated to ensure the highest quality and \
                          authenticity.",
        },
    ],
    nft_info: NftInfo {
        description: "Non-Fungible Tokens (NFTs) are unique digital assets that represent \
                      ownership of digital content on the blockchain. Each NFT is one-of-a-kind \
                      and cannot be replicated, making them perfect for digital art, \
                      collectibles, and exclusive content.",
        benefits: &[
            "Proof of authentic ownership",
            "Blockchain-verified authenticity",
            "Potential for value appreciation",
            "Access to exclusive communities",
            "Transferable digital ownership",
        ],
    },
    about: AboutUs {
        story: "Founded in 2024, NextGen Marketplace emerged from a vision to revolutionize \
                online shopping by combining cutting-edge technology with exceptional user \
                experience. We believe in the power of innovation to transform how people \
                discover, purchase, and interact with products in the digital age.",
        mission: "To create the most innovative and user-friendly e-commerce platform that \
                  bridges the gap between traditional retail and the digital future, offering \
                  premium products and NFTs with unmatched customer service.",
        vision: "To become the world's leading marketplace for next-generation products, where \
                 technology meets creativity, and every customer enjoys a seamless, secure, and \
                 delightful shopping experience.",
        values: &[
            Feature {
                icon: "users",
                title: "Customer First",
                description: "Every decision we make is centered around delivering exceptional \
                              value and experience to our customers.",
            },
            Feature {
                icon: "award",
                title: "Quality Excellence",
                description: "We maintain the highest standards in product curation, platform \
                              performance, and customer service.",
            },
            Feature {
                icon: "target",
                title: "Innovation",
                description: "We continuously push boundaries and embrace new technologies to \
                              stay ahead of the curve.",
            },
            Feature {
                icon: "globe",
                title: "Sustainability",
                description: "We're committed to responsible business practices and supporting a \
                              sustainable future.",
            },
        ],
        team: &[
            TeamMember {
                name: "Alex Johnson",
                role: "CEO & Founder",
                bio: "Visionary leader with 15+ years in e-commerce and technology innovation.",
                image: "/placeholder.svg?height=300&width=300",
            },
            TeamMember {
                name: "Sarah Chen",
                role: "CTO",
                bio: "Tech expert specializing in blockchain technology and scalable web \
                      platforms.",
                image: "/placeholder.svg?height=300&width=300",
            },
            TeamMember {
                name: "Marcus Rodriguez",
                role: "Head of Design",
                bio: "Creative director focused on user experience and modern design principles.",
                image: "/placeholder.svg?height=300&width=300",
            },
        ],
    },
};
