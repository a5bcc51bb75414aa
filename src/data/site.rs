use crate::models::contact::ContactMethod;
use crate::models::site::{
    AboutContent, CompanyValue, ContactChannel, ContactContent, ContactMethodOption, Feature,
    Hero, Icon, NavItem, ProcessStep, ServiceOffering, ServicesContent, Stat, TeamMember,
    Testimonial,
};

pub const AGENCY_NAME: &str = "Lion Homes";

#[must_use]
pub fn navigation() -> Vec<NavItem> {
    vec![
        NavItem { name: "Home", href: "/", icon: Icon::Home },
        NavItem { name: "About", href: "/about", icon: Icon::Info },
        NavItem { name: "Services", href: "/services", icon: Icon::Settings },
        NavItem { name: "Listings", href: "/listings", icon: Icon::Grid },
        NavItem { name: "Blog", href: "/blog", icon: Icon::BookOpen },
        NavItem { name: "Contact", href: "/contact", icon: Icon::Phone },
    ]
}

#[must_use]
pub fn home_hero() -> Hero {
    Hero {
        title: "Find Your Dream Home",
        subtitle: "Discover luxury properties with Lion Homes - where exceptional service meets extraordinary properties",
    }
}

#[must_use]
pub fn home_features() -> Vec<Feature> {
    vec![
        Feature {
            icon: Icon::Search,
            title: "Expert Property Search",
            description: "Find your perfect home with our advanced search and local expertise",
        },
        Feature {
            icon: Icon::DollarSign,
            title: "Market Analysis",
            description: "Get accurate valuations and market insights for informed decisions",
        },
        Feature {
            icon: Icon::Users,
            title: "Dedicated Support",
            description: "Personal service from experienced agents throughout your journey",
        },
        Feature {
            icon: Icon::Award,
            title: "Award Winning",
            description: "Recognized excellence in real estate service and client satisfaction",
        },
    ]
}

#[must_use]
pub fn about() -> AboutContent {
    AboutContent {
        hero: Hero {
            title: "About Lion Homes",
            subtitle: "For over 15 years, Lion Homes has been the premier choice for luxury real estate in Southern California. We combine deep market knowledge with personalized service to deliver exceptional results for our clients.",
        },
        stats: vec![
            Stat { icon: Icon::Users, value: "500+", label: "Happy Clients" },
            Stat { icon: Icon::Award, value: "15+", label: "Years Experience" },
            Stat { icon: Icon::TrendingUp, value: "$2B+", label: "Properties Sold" },
            Stat { icon: Icon::Star, value: "4.9", label: "Client Rating" },
        ],
        mission: "To provide unparalleled real estate services that exceed expectations, build lasting relationships, and help our clients achieve their property dreams. We believe that buying or selling a home should be an exciting and rewarding experience, not a stressful one.",
        quote: "Excellence is not a skill, it's an attitude we bring to every client interaction.",
        team: vec![
            TeamMember {
                name: "Sarah Johnson",
                role: "Founder & CEO",
                experience: "15+ years",
                specialties: vec!["Luxury Properties", "Investment"],
                description: "Sarah founded Lion Homes with a vision to revolutionize the real estate experience through personalized service and market expertise.",
            },
            TeamMember {
                name: "Michael Chen",
                role: "Senior Agent",
                experience: "12+ years",
                specialties: vec!["Residential", "First-time Buyers"],
                description: "Michael specializes in helping families find their perfect home, with a focus on understanding unique needs and preferences.",
            },
            TeamMember {
                name: "Emily Rodriguez",
                role: "Luxury Specialist",
                experience: "10+ years",
                specialties: vec!["Luxury Estates", "Waterfront"],
                description: "Emily brings unparalleled expertise in luxury real estate, serving high-net-worth clients with discretion and excellence.",
            },
        ],
        values: vec![
            CompanyValue {
                title: "Integrity",
                description: "We conduct business with unwavering honesty and transparency in every transaction.",
            },
            CompanyValue {
                title: "Excellence",
                description: "We strive for perfection in service delivery and continuously exceed client expectations.",
            },
            CompanyValue {
                title: "Innovation",
                description: "We embrace technology and modern practices to enhance the real estate experience.",
            },
            CompanyValue {
                title: "Community",
                description: "We're committed to building stronger communities through responsible real estate practices.",
            },
        ],
    }
}

#[must_use]
pub fn services() -> ServicesContent {
    ServicesContent {
        hero: Hero {
            title: "Our Services",
            subtitle: "Comprehensive real estate services designed to exceed your expectations and achieve your property goals.",
        },
        services: vec![
            ServiceOffering {
                icon: Icon::Home,
                title: "Residential Buying",
                description: "Find your perfect home with our comprehensive buying services",
                features: vec![
                    "Personalized property search",
                    "Market analysis and pricing",
                    "Negotiation expertise",
                    "Transaction coordination",
                    "Post-purchase support",
                ],
                highlight: "First-time buyer friendly",
            },
            ServiceOffering {
                icon: Icon::DollarSign,
                title: "Property Selling",
                description: "Maximize your property value with our proven selling strategies",
                features: vec![
                    "Professional property valuation",
                    "Strategic marketing campaigns",
                    "Professional photography",
                    "Staging consultation",
                    "Multiple offer management",
                ],
                highlight: "Average 15 days on market",
            },
            ServiceOffering {
                icon: Icon::Building,
                title: "Investment Properties",
                description: "Build wealth through strategic real estate investments",
                features: vec![
                    "ROI analysis and projections",
                    "Market trend insights",
                    "Portfolio optimization",
                    "Rental property management",
                    "1031 exchange facilitation",
                ],
                highlight: "20%+ average returns",
            },
            ServiceOffering {
                icon: Icon::Users,
                title: "Property Management",
                description: "Full-service property management for maximum returns",
                features: vec![
                    "Tenant screening and placement",
                    "Rent collection and accounting",
                    "Maintenance coordination",
                    "Legal compliance",
                    "Performance reporting",
                ],
                highlight: "98% occupancy rate",
            },
            ServiceOffering {
                icon: Icon::TrendingUp,
                title: "Market Consultation",
                description: "Expert insights and strategies for any real estate decision",
                features: vec![
                    "Market condition analysis",
                    "Investment strategy planning",
                    "Property development consulting",
                    "Zoning and permits guidance",
                    "Financial planning integration",
                ],
                highlight: "Data-driven insights",
            },
            ServiceOffering {
                icon: Icon::Shield,
                title: "Luxury Estates",
                description: "Specialized service for high-end and luxury properties",
                features: vec![
                    "Discreet and confidential service",
                    "Global marketing network",
                    "Luxury property expertise",
                    "Concierge-level support",
                    "Exclusive listing access",
                ],
                highlight: "White-glove service",
            },
        ],
        testimonials: vec![
            Testimonial {
                name: "Jennifer Walsh",
                role: "Home Buyer",
                content: "Lion Homes made our first home purchase seamless. Their expertise and patience throughout the process was incredible.",
                rating: 5,
            },
            Testimonial {
                name: "Robert Kim",
                role: "Property Investor",
                content: "The investment analysis provided by Lion Homes helped me build a portfolio that's exceeded all expectations.",
                rating: 5,
            },
            Testimonial {
                name: "Maria Santos",
                role: "Luxury Seller",
                content: "Their luxury property expertise and marketing strategy sold our estate 20% above asking price.",
                rating: 5,
            },
        ],
        process: vec![
            ProcessStep {
                step: "01",
                title: "Initial Consultation",
                description: "We discuss your goals, timeline, and preferences to create a personalized strategy.",
            },
            ProcessStep {
                step: "02",
                title: "Market Analysis",
                description: "Comprehensive market research and analysis to inform your real estate decisions.",
            },
            ProcessStep {
                step: "03",
                title: "Strategic Planning",
                description: "Develop a customized plan tailored to your specific needs and objectives.",
            },
            ProcessStep {
                step: "04",
                title: "Execution",
                description: "Professional implementation with regular updates and seamless coordination.",
            },
            ProcessStep {
                step: "05",
                title: "Completion",
                description: "Successful transaction completion with ongoing support for future needs.",
            },
        ],
    }
}

/// Service interests selectable on the contact form.
pub const SERVICE_INTERESTS: &[&str] = &[
    "Property Buying",
    "Property Selling",
    "Investment Consultation",
    "Property Management",
    "Market Analysis",
    "Luxury Properties",
    "Other",
];

#[must_use]
pub fn contact() -> ContactContent {
    ContactContent {
        hero: Hero {
            title: "Contact Us",
            subtitle: "Ready to start your real estate journey? We're here to help you every step of the way.",
        },
        channels: vec![
            ContactChannel {
                icon: Icon::Phone,
                title: "Phone",
                details: vec!["+1 (555) 123-4567", "+1 (555) 123-4568"],
                description: "Call us for immediate assistance",
            },
            ContactChannel {
                icon: Icon::Mail,
                title: "Email",
                details: vec!["info@lionhomes.com", "sales@lionhomes.com"],
                description: "Send us an email anytime",
            },
            ContactChannel {
                icon: Icon::MapPin,
                title: "Office",
                details: vec!["1234 Luxury Avenue", "Beverly Hills, CA 90210"],
                description: "Visit our beautiful showroom",
            },
            ContactChannel {
                icon: Icon::Clock,
                title: "Hours",
                details: vec!["Mon-Fri: 9:00 AM - 7:00 PM", "Sat-Sun: 10:00 AM - 5:00 PM"],
                description: "We're here when you need us",
            },
        ],
        service_interests: SERVICE_INTERESTS.to_vec(),
        contact_methods: ContactMethod::ALL
            .iter()
            .map(|m| ContactMethodOption {
                value: m.value(),
                label: m.label(),
            })
            .collect(),
    }
}
