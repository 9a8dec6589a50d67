//! Hand-authored geography question bank, one table per difficulty tier.

use super::BankEntry;

#[rustfmt::skip]
pub(super) const EASY: &[BankEntry] = &[
    ("What is the capital of Australia?", &["Sydney", "Melbourne", "Canberra", "Brisbane"], 2),
    ("Which is the largest ocean?", &["Indian", "Atlantic", "Arctic", "Pacific"], 3),
    ("Which continent is Egypt in?", &["Asia", "Africa", "Europe", "South America"], 1),
    ("Mount Everest lies on the border of Nepal and which country?", &["India", "China (Tibet)", "Bhutan", "Pakistan"], 1),
    ("What is the capital of Japan?", &["Kyoto", "Tokyo", "Osaka", "Nagoya"], 1),
    ("Which continent is the Sahara Desert in?", &["Asia", "Africa", "Australia", "North America"], 1),
    ("Which line divides Earth into Northern and Southern Hemispheres?", &["Prime Meridian", "Equator", "Tropic of Cancer", "International Date Line"], 1),
    ("What is the capital of New Zealand?", &["Auckland", "Wellington", "Christchurch", "Hamilton"], 1),
    ("Which country is also a continent?", &["Iceland", "Australia", "Madagascar", "Greenland"], 1),
    ("Which ocean borders the west coast of the USA?", &["Atlantic", "Indian", "Pacific", "Arctic"], 2),
    ("What is the capital of Canada?", &["Toronto", "Ottawa", "Vancouver", "Montreal"], 1),
    ("The Amazon rainforest is primarily in which country?", &["Peru", "Brazil", "Colombia", "Venezuela"], 1),
];

#[rustfmt::skip]
pub(super) const MEDIUM: &[BankEntry] = &[
    ("Which river flows through Paris?", &["Seine", "Thames", "Danube", "Rhine"], 0),
    ("Which country has the most time zones (including territories)?", &["USA", "Russia", "France", "UK"], 2),
    ("The Strait of Gibraltar separates Spain and which African country?", &["Morocco", "Algeria", "Tunisia", "Libya"], 0),
    ("Which lake is the largest by area?", &["Lake Superior", "Caspian Sea", "Lake Victoria", "Lake Baikal"], 1),
    ("Which country has the city of Dubrovnik?", &["Croatia", "Greece", "Italy", "Albania"], 0),
    ("Which river is the longest in Africa?", &["Congo", "Niger", "Nile", "Zambezi"], 2),
    ("What is the capital of South Korea?", &["Seoul", "Busan", "Incheon", "Daegu"], 0),
    ("Which desert is in northern China and southern Mongolia?", &["Taklamakan", "Thar", "Gobi", "Karakum"], 2),
    ("What is the capital of Argentina?", &["Buenos Aires", "Santiago", "Lima", "Montevideo"], 0),
    ("Which country does NOT border Germany?", &["Denmark", "Poland", "Italy", "Czechia"], 2),
    ("Kilimanjaro is in which country?", &["Kenya", "Tanzania", "Uganda", "Ethiopia"], 1),
    ("Which country owns Greenland?", &["Norway", "Iceland", "Denmark", "Canada"], 2),
];

#[rustfmt::skip]
pub(super) const HARD: &[BankEntry] = &[
    ("Which country has the most international borders?", &["China", "Russia", "Germany", "Brazil"], 0),
    ("Which is the highest waterfall by uninterrupted drop?", &["Angel Falls", "Tugela Falls", "Niagara Falls", "Iguazu Falls"], 0),
    ("The Urals traditionally separate which two continents?", &["Europe & Asia", "Asia & Africa", "North & South America", "Europe & Africa"], 0),
    ("What is the capital of Ethiopia?", &["Mogadishu", "Khartoum", "Addis Ababa", "Asmara"], 2),
    ("Which sea is almost entirely surrounded by land and connected to the Atlantic via the Dardanelles/Bosphorus?", &["Black Sea", "Baltic Sea", "Red Sea", "Caspian Sea"], 0),
    ("Which country has the largest number of volcanoes overall?", &["Japan", "Indonesia", "USA", "Iceland"], 1),
    ("Which desert is on the coast and influenced by the Benguela Current?", &["Namib", "Atacama", "Kalahari", "Mojave"], 0),
    ("What is the capital of Kazakhstan (2025)?", &["Almaty", "Astana", "Nur-Sultan", "Shymkent"], 1),
    ("Which country does NOT border the Caspian Sea?", &["Kazakhstan", "Azerbaijan", "Georgia", "Turkmenistan"], 2),
    ("Which mountain range forms much of the border between France and Spain?", &["Alps", "Pyrenees", "Apennines", "Carpathians"], 1),
    ("Which is the saltiest large body of water on Earth?", &["Dead Sea", "Great Salt Lake", "Don Juan Pond", "Lake Assal"], 2),
];

#[rustfmt::skip]
pub(super) const EXPERT: &[BankEntry] = &[
    ("Which country is doubly landlocked?", &["Liechtenstein", "Uzbekistan", "Andorra", "Bolivia"], 1),
    ("Which pair are true enclaves (entirely within another country)?", &["Lesotho & San Marino", "Lesotho & Vatican City", "San Marino & Monaco", "Andorra & Vatican City"], 1),
    ("The only country with a flag that is not quadrilateral?", &["Nepal", "Switzerland", "Vatican City", "Bhutan"], 0),
    ("Which country has the most UNESCO World Heritage Sites (c. mid-2020s)?", &["Italy", "China", "India", "Spain"], 1),
    ("Which city is furthest south?", &["Cape Town", "Buenos Aires", "Melbourne", "Auckland"], 0),
    ("Which sovereign state has two exclaves separated by the 'Zangezur corridor' topic?", &["Azerbaijan", "Armenia", "Georgia", "Turkey"], 0),
    ("Which ocean current contributes to the Atacama’s aridity?", &["Humboldt (Peru) Current", "Kuroshio Current", "Gulf Stream", "Agulhas Current"], 0),
    ("Which country spans both Europe and Asia and has its capital in Europe?", &["Turkey", "Russia", "Kazakhstan", "Azerbaijan"], 1),
    ("Which African country is entirely north of the Tropic of Cancer?", &["Mauritania", "Algeria", "Mali", "Niger"], 1),
    ("Which is the largest landlocked country by area?", &["Kazakhstan", "Mongolia", "Chad", "Bolivia"], 0),
    ("Which river delta is the largest in the world by area?", &["Amazon", "Ganges-Brahmaputra", "Okavango", "Niger"], 1),
];
