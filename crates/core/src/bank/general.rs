//! Hand-authored general knowledge question bank, one table per difficulty tier.

use super::BankEntry;

#[rustfmt::skip]
pub(super) const EASY: &[BankEntry] = &[
    ("What is the capital of Japan?", &["Kyoto", "Tokyo", "Osaka", "Sapporo"], 1),
    ("Which planet is known as the Red Planet?", &["Mars", "Jupiter", "Venus", "Mercury"], 0),
    ("Which ocean is the largest by surface area?", &["Indian", "Arctic", "Atlantic", "Pacific"], 3),
    ("What is the smallest prime number?", &["0", "1", "2", "3"], 2),
    ("Which city is nicknamed 'The Big Apple'?", &["Los Angeles", "Chicago", "New York City", "San Francisco"], 2),
    ("Water boils at what temperature (°C) at sea level?", &["90", "95", "100", "105"], 2),
    ("CPU stands for…", &["Central Processing Unit", "Computer Performance Utility", "Core Processing Unit", "Central Performance Unit"], 0),
    ("Which animal is the tallest?", &["Elephant", "Giraffe", "Ostrich", "Polar Bear"], 1),
    ("How many continents are there?", &["5", "6", "7", "8"], 2),
    ("What is the largest mammal?", &["African Elephant", "Blue Whale", "Hippopotamus", "Giraffe"], 1),
    ("How many sides does a square have?", &["3", "4", "5", "6"], 1),
    ("The currency of the United States is the…", &["Euro", "US Dollar", "Pound", "Yen"], 1),
    ("Which animal is famous in China and black-and-white?", &["Giant panda", "Raccoon", "Skunk", "Zebra"], 0),
    ("The chemical formula for water is…", &["HO", "H2O", "OH2", "H2O2"], 1),
];

#[rustfmt::skip]
pub(super) const MEDIUM: &[BankEntry] = &[
    ("Who wrote '1984'?", &["George Orwell", "Aldous Huxley", "J.K. Rowling", "Ernest Hemingway"], 0),
    ("Who was the first person to walk on the Moon?", &["Buzz Aldrin", "Yuri Gagarin", "Neil Armstrong", "Michael Collins"], 2),
    ("Which element has atomic number 1?", &["Helium", "Hydrogen", "Oxygen", "Lithium"], 1),
    ("Which river flows through Egypt?", &["Amazon", "Nile", "Danube", "Rhine"], 1),
    ("What language is primarily spoken in Brazil?", &["Spanish", "Portuguese", "French", "English"], 1),
    ("What is the fastest land animal?", &["Lion", "Cheetah", "Pronghorn", "Greyhound"], 1),
    ("What is the hardest natural substance?", &["Diamond", "Quartz", "Sapphire", "Obsidian"], 0),
    ("Which is the largest hot desert?", &["Gobi", "Sahara", "Kalahari", "Arabian"], 1),
    ("Capital of Canada?", &["Toronto", "Vancouver", "Ottawa", "Montreal"], 2),
    ("Which country hosted the 2016 Summer Olympics?", &["China", "Brazil", "UK", "Russia"], 1),
    ("Which instrument has keys, pedals, and strings?", &["Guitar", "Piano", "Violin", "Flute"], 1),
    ("Which metal is liquid at room temperature?", &["Mercury", "Aluminium", "Lead", "Zinc"], 0),
    ("Which organ pumps blood through the body?", &["Lungs", "Heart", "Liver", "Kidneys"], 1),
    ("How many degrees are in a right angle?", &["30", "45", "60", "90"], 3),
];

#[rustfmt::skip]
pub(super) const HARD: &[BankEntry] = &[
    ("World War II began in which year?", &["1914", "1918", "1939", "1945"], 2),
    ("Who painted 'The Starry Night'?", &["Claude Monet", "Pablo Picasso", "Vincent van Gogh", "Salvador Dalí"], 2),
    ("The currency of Japan is the…", &["Won", "Yuan", "Yen", "Ringgit"], 2),
    ("Which island is the largest in the world (not a continent)?", &["Borneo", "New Guinea", "Great Britain", "Greenland"], 3),
    ("SI unit of electrical resistance is the…", &["Volt", "Ampere", "Ohm", "Watt"], 2),
    ("Chemical formula for table salt is…", &["NaCl", "KCl", "Na2CO3", "CaCl2"], 0),
    ("Tallest mountain above sea level?", &["K2", "Everest", "Kangchenjunga", "Lhotse"], 1),
    ("Planet famous for its rings?", &["Jupiter", "Saturn", "Uranus", "Neptune"], 1),
    ("DNA has the shape of a…", &["Single helix", "Double helix", "Beta sheet", "Cube"], 1),
    ("Approximate speed of light in vacuum?", &["3,000 km/s", "30,000 km/s", "300,000 km/s", "3,000,000 km/s"], 2),
    ("Who proposed the general theory of relativity?", &["Max Planck", "Niels Bohr", "Albert Einstein", "Erwin Schrödinger"], 2),
    ("Which continent has the most countries?", &["Europe", "Asia", "Africa", "South America"], 2),
];

#[rustfmt::skip]
pub(super) const EXPERT: &[BankEntry] = &[
    ("Capital of Kazakhstan (2025)?", &["Almaty", "Astana", "Nur-Sultan", "Shymkent"], 1),
    ("Who discovered penicillin?", &["Alexander Fleming", "Louis Pasteur", "Edward Jenner", "Robert Koch"], 0),
    ("First woman to win a Nobel Prize?", &["Marie Curie", "Rosalind Franklin", "Ada Lovelace", "Lise Meitner"], 0),
    ("Rarest common ABO/Rh blood type globally?", &["O−", "AB−", "A−", "B−"], 1),
    ("Finnish belongs to which language family?", &["Indo-European", "Uralic", "Altaic", "Afroasiatic"], 1),
    ("Largest moon in the Solar System?", &["Titan", "Ganymede", "Callisto", "Europa"], 1),
    ("Who proved Fermat’s Last Theorem (1990s)?", &["Terence Tao", "Andrew Wiles", "Grigori Perelman", "Maryam Mirzakhani"], 1),
    ("Element named after a dwarf planet?", &["Uranium", "Neptunium", "Plutonium", "Mercury"], 2),
    ("Composer of 'The Four Seasons'?", &["Bach", "Vivaldi", "Mozart", "Handel"], 1),
    ("Timbuktu is in which country?", &["Niger", "Mali", "Chad", "Burkina Faso"], 1),
    ("Heisenberg’s uncertainty principle is in…", &["Thermodynamics", "Relativity", "Quantum mechanics", "Classical mechanics"], 2),
    ("Which country has the most UNESCO World Heritage Sites (c. mid-2020s)?", &["Italy", "China", "India", "Spain"], 1),
];
