//! Built-in catalog of districts the LULC statistics API serves, keyed by census
//! district code.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct District {
    pub name: &'static str,
    pub code: &'static str,
}

/// Some names repeat across states (Aurangabad, Bilaspur, Hamirpur); codes never do.
pub static DISTRICTS: &[District] = &[
    District { name: "Patna", code: "1028" },
    District { name: "Dindori", code: "2341" },
    District { name: "Hugli", code: "1912" },
    District { name: "Haora", code: "1916" },
    District { name: "Aurangabad", code: "1034" },
    District { name: "Tinsukia", code: "1814" },
    District { name: "Bongaigaon", code: "1804" },
    District { name: "Darrang", code: "1808" },
    District { name: "Dhuburi", code: "1802" },
    District { name: "Barpeta", code: "1805" },
    District { name: "Birbhum", code: "1908" },
    District { name: "Shahdol", code: "2316" },
    District { name: "East Midnapore", code: "1915" },
    District { name: "Kalaburagi", code: "2904" },
    District { name: "Koppal", code: "2907" },
    District { name: "Garhchiroli", code: "2712" },
    District { name: "Dumka", code: "2011" },
    District { name: "Ysr Kadapa", code: "2820" },
    District { name: "Siwan", code: "1016" },
    District { name: "Bagalakote", code: "2902" },
    District { name: "Bengaluru Rural", code: "2921" },
    District { name: "Rohtas", code: "1032" },
    District { name: "Tiruvannamalai", code: "3306" },
    District { name: "Gaya", code: "1035" },
    District { name: "Jajpur", code: "2113" },
    District { name: "Munger", code: "1024" },
    District { name: "Mahesana", code: "2404" },
    District { name: "Chatra", code: "2003" },
    District { name: "Bokaro", code: "2013" },
    District { name: "Salem", code: "3308" },
    District { name: "Dahod", code: "2418" },
    District { name: "Kishanganj", code: "1008" },
    District { name: "Darbhanga", code: "1013" },
    District { name: "Wardha", code: "2708" },
    District { name: "Kalahandi", code: "2126" },
    District { name: "Sepahijala", code: "1608" },
    District { name: "Thiruvananthapuram", code: "3214" },
    District { name: "Deoghar", code: "2007" },
    District { name: "Dhanbad", code: "2012" },
    District { name: "Upper Dibang Valley", code: "1216" },
    District { name: "Malkangiri", code: "2130" },
    District { name: "Sundargarh", code: "2105" },
    District { name: "Koraput", code: "2129" },
    District { name: "Jalna", code: "2718" },
    District { name: "Dantewada", code: "2216" },
    District { name: "Kawardha", code: "2208" },
    District { name: "Giridih", code: "2006" },
    District { name: "Bankura", code: "1913" },
    District { name: "Virudhunagar", code: "3326" },
    District { name: "Lunglei", code: "1506" },
    District { name: "Senapati", code: "1401" },
    District { name: "Panna", code: "2310" },
    District { name: "Serchhip", code: "1505" },
    District { name: "Dhule", code: "2702" },
    District { name: "Nagpur", code: "2709" },
    District { name: "Chandrapur", code: "2713" },
    District { name: "Bhandara", code: "2727" },
    District { name: "Jalgaon", code: "2703" },
    District { name: "Osmanabad", code: "2729" },
    District { name: "Nandurbar", code: "2701" },
    District { name: "Damoh", code: "2312" },
    District { name: "Datia", code: "2305" },
    District { name: "Dhar", code: "2325" },
    District { name: "Balaghat", code: "2345" },
    District { name: "Chhindwara", code: "2343" },
    District { name: "Tikamgarh", code: "2308" },
    District { name: "Ashoknagar", code: "2347" },
    District { name: "Kanker", code: "2214" },
    District { name: "Hoshangabad", code: "2337" },
    District { name: "Jhabua", code: "2324" },
    District { name: "Guna", code: "2307" },
    District { name: "Sidhi", code: "2317" },
    District { name: "Umaria", code: "2315" },
    District { name: "Jharsuguda", code: "2102" },
    District { name: "Kolkata", code: "1917" },
    District { name: "Bilaspur", code: "2207" },
    District { name: "Chikkaballapura", code: "2930" },
    District { name: "Bidar", code: "2905" },
    District { name: "Raichur", code: "2906" },
    District { name: "Boudh", code: "2122" },
    District { name: "Anand", code: "2415" },
    District { name: "Chennai", code: "3302" },
    District { name: "Nagapattinam", code: "3319" },
    District { name: "Godda", code: "2008" },
    District { name: "Hazaribag", code: "2004" },
    District { name: "Jamtara", code: "2019" },
    District { name: "Koderma", code: "2005" },
    District { name: "Lohardaga", code: "2015" },
    District { name: "Vadodara", code: "2419" },
    District { name: "Bhabua", code: "1031" },
    District { name: "Lakhisarai", code: "1025" },
    District { name: "Palamu", code: "2002" },
    District { name: "Ranchi", code: "2014" },
    District { name: "Dharwad", code: "2909" },
    District { name: "Katni", code: "2338" },
    District { name: "Raisen", code: "2334" },
    District { name: "Rewa", code: "2314" },
    District { name: "Harda", code: "2336" },
    District { name: "Narsinghpur", code: "2340" },
    District { name: "Tuensang", code: "1302" },
    District { name: "Sagar", code: "2311" },
    District { name: "Seoni", code: "2344" },
    District { name: "Vidisha", code: "2331" },
    District { name: "Shivpuri", code: "2306" },
    District { name: "Shajapur", code: "2322" },
    District { name: "West Nimar", code: "2327" },
    District { name: "Bid", code: "2710" },
    District { name: "Bhopal", code: "2332" },
    District { name: "Burhanpur", code: "2348" },
    District { name: "Pashchim Singhbhum", code: "2017" },
    District { name: "Hingoli", code: "2716" },
    District { name: "Gumla", code: "2016" },
    District { name: "Latehar", code: "2020" },
    District { name: "Pakur", code: "2010" },
    District { name: "Rajgarh", code: "2330" },
    District { name: "Ratlam", code: "2320" },
    District { name: "Satna", code: "2313" },
    District { name: "Gwalior", code: "2304" },
    District { name: "East Khasi Hills", code: "1706" },
    District { name: "Kolhapur", code: "2734" },
    District { name: "Lohit", code: "1211" },
    District { name: "Pune", code: "2725" },
    District { name: "Satara", code: "2731" },
    District { name: "Chandel", code: "1409" },
    District { name: "Champhai", code: "1504" },
    District { name: "North Sikkim", code: "1101" },
    District { name: "Kolasib", code: "1502" },
    District { name: "Aizawl", code: "1503" },
    District { name: "West Khasi Hills", code: "1704" },
    District { name: "Nagaon", code: "1810" },
    District { name: "Zunheboto", code: "1304" },
    District { name: "Kohima", code: "1307" },
    District { name: "Theni", code: "3325" },
    District { name: "Tirap", code: "1213" },
    District { name: "Goalpara", code: "1803" },
    District { name: "Golaghat", code: "1818" },
    District { name: "Kokrajhar", code: "1801" },
    District { name: "Marigaon", code: "1809" },
    District { name: "Nalbari", code: "1807" },
    District { name: "Lower Subansiri", code: "1205" },
    District { name: "West Sikkim", code: "1102" },
    District { name: "Ramanathapuram", code: "3327" },
    District { name: "Kancheepuram", code: "3303" },
    District { name: "Pok", code: "1" },
    District { name: "Tawang", code: "1201" },
    District { name: "Upper Subansiri", code: "1206" },
    District { name: "Hyderabad", code: "3605" },
    District { name: "Jalpaiguri", code: "1902" },
    District { name: "Tamenglong", code: "1402" },
    District { name: "Churachandpur", code: "1403" },
    District { name: "Ukhrul", code: "1408" },
    District { name: "East Kameng", code: "1203" },
    District { name: "South Sikkim", code: "1103" },
    District { name: "Maldah", code: "1906" },
    District { name: "Murshidabad", code: "1907" },
    District { name: "Mandya", code: "2922" },
    District { name: "Rangareddy", code: "3606" },
    District { name: "Ujjain", code: "2321" },
    District { name: "Dhemaji", code: "1813" },
    District { name: "Uttar Dinajpur", code: "1904" },
    District { name: "Krishna", code: "2816" },
    District { name: "Potti Sriramulu Nellore", code: "2819" },
    District { name: "Prakasam", code: "2818" },
    District { name: "Banka", code: "1023" },
    District { name: "Sheohar", code: "1003" },
    District { name: "Bhagalpur", code: "1022" },
    District { name: "Madhepura", code: "1011" },
    District { name: "Vaishali", code: "1018" },
    District { name: "Karur", code: "3314" },
    District { name: "Saran", code: "1017" },
    District { name: "Sivaganga", code: "3323" },
    District { name: "West Siang", code: "1207" },
    District { name: "Visakhapatnam", code: "2813" },
    District { name: "Patan", code: "2403" },
    District { name: "Lower Dibang Valley", code: "1215" },
    District { name: "Papum Pare", code: "1204" },
    District { name: "Kheda", code: "2416" },
    District { name: "North Cachar Hills", code: "1820" },
    District { name: "Sonitpur", code: "1811" },
    District { name: "Kanniyakumari", code: "3330" },
    District { name: "Jorhat", code: "1817" },
    District { name: "Karimganj", code: "1822" },
    District { name: "Sibsagar", code: "1816" },
    District { name: "Kurung Kumey", code: "1214" },
    District { name: "Lawngtlai", code: "1507" },
    District { name: "Upper Siang", code: "1209" },
    District { name: "Sambalpur", code: "2103" },
    District { name: "Mayurbhanj", code: "2107" },
    District { name: "Jamui", code: "1037" },
    District { name: "Vizianagaram", code: "2812" },
    District { name: "Purba Champaran", code: "1002" },
    District { name: "Raipur", code: "2211" },
    District { name: "Thoothukudi", code: "3328" },
    District { name: "Raj Nandgaon", code: "2209" },
    District { name: "Nawada", code: "1036" },
    District { name: "Dibrugarh", code: "1815" },
    District { name: "Puruliya", code: "1914" },
    District { name: "Barddhaman", code: "1909" },
    District { name: "Surendranagar", code: "2408" },
    District { name: "Indore", code: "2326" },
    District { name: "Gandhinagar", code: "2406" },
    District { name: "Jashpur", code: "2203" },
    District { name: "Raigarh", code: "2204" },
    District { name: "Surguja", code: "2217" },
    District { name: "Nalgonda", code: "3608" },
    District { name: "Yadgir", code: "2933" },
    District { name: "Thanjavur", code: "3321" },
    District { name: "Bastar", code: "2215" },
    District { name: "Gajapati", code: "2120" },
    District { name: "Keonjhar", code: "2106" },
    District { name: "South 24 Parganas", code: "1918" },
    District { name: "Mandla", code: "2342" },
    District { name: "Mandsaur", code: "2319" },
    District { name: "Angul", code: "2115" },
    District { name: "Baragarh", code: "2101" },
    District { name: "Dhenkanal", code: "2114" },
    District { name: "Medak", code: "3604" },
    District { name: "Nizamabad", code: "3602" },
    District { name: "Nalanda", code: "1027" },
    District { name: "Buldana", code: "2704" },
    District { name: "Yavatmal", code: "2714" },
    District { name: "Akola", code: "2705" },
    District { name: "Nanded", code: "2715" },
    District { name: "Parbhani", code: "2717" },
    District { name: "Srikakulam", code: "2811" },
    District { name: "Junagadh", code: "2412" },
    District { name: "Tirunelveli Kattabo", code: "3329" },
    District { name: "Latur", code: "2728" },
    District { name: "Nuapada", code: "2125" },
    District { name: "Tiruchchirappalli", code: "3315" },
    District { name: "Muzaffarpur", code: "1014" },
    District { name: "Kendrapara", code: "2110" },
    District { name: "Sonepur", code: "2123" },
    District { name: "Kachchh", code: "2401" },
    District { name: "Dharmapuri", code: "3305" },
    District { name: "Gopalganj", code: "1015" },
    District { name: "Madhubani", code: "1005" },
    District { name: "Araria", code: "1007" },
    District { name: "Dakshin Dinajpur", code: "1905" },
    District { name: "Begusarai", code: "1020" },
    District { name: "Khagaria", code: "1021" },
    District { name: "Bhavnagar", code: "2414" },
    District { name: "Gondiya", code: "2711" },
    District { name: "Bishnupur", code: "1404" },
    District { name: "Deogarh", code: "2104" },
    District { name: "Jagatsinghpur", code: "2111" },
    District { name: "Namakkal", code: "3309" },
    District { name: "Madurai", code: "3324" },
    District { name: "Bhojpur", code: "1029" },
    District { name: "Buxar", code: "1030" },
    District { name: "Bharuch", code: "2421" },
    District { name: "Valsad", code: "2425" },
    District { name: "Ahmadabad", code: "2407" },
    District { name: "Jamnagar", code: "2410" },
    District { name: "Guntur", code: "2817" },
    District { name: "Porbandar", code: "2411" },
    District { name: "Amreli", code: "2413" },
    District { name: "Haveri", code: "2911" },
    District { name: "Kasaragod", code: "3201" },
    District { name: "Gomati", code: "1606" },
    District { name: "Thiruvallur", code: "3301" },
    District { name: "Thiruvarur", code: "3320" },
    District { name: "Kozhikode", code: "3204" },
    District { name: "Kollam", code: "3213" },
    District { name: "East Siang", code: "1208" },
    District { name: "Chamarajanagar", code: "2927" },
    District { name: "Chikkamagaluru", code: "2917" },
    District { name: "Ballari", code: "2912" },
    District { name: "Davanagere", code: "2914" },
    District { name: "Gadag", code: "2908" },
    District { name: "Kolar", code: "2919" },
    District { name: "Mysuru", code: "2926" },
    District { name: "Tumakuru", code: "2918" },
    District { name: "Mumbai Suburban", code: "2722" },
    District { name: "Morena", code: "2302" },
    District { name: "Sahibganj", code: "2009" },
    District { name: "Ernakulam", code: "3208" },
    District { name: "West Imphal", code: "1406" },
    District { name: "East Garo Hills", code: "1702" },
    District { name: "Bhind", code: "2303" },
    District { name: "Raygad", code: "2724" },
    District { name: "The Dangs", code: "2423" },
    District { name: "Thane", code: "2721" },
    District { name: "Nabarangpur", code: "2128" },
    District { name: "Narmada", code: "2420" },
    District { name: "Villupuram", code: "3307" },
    District { name: "Ariyalur", code: "3317" },
    District { name: "Chitradurga", code: "2913" },
    District { name: "Vellore", code: "3304" },
    District { name: "Erode", code: "3310" },
    District { name: "Pudukkottai", code: "3322" },
    District { name: "Cuddalore", code: "3318" },
    District { name: "Mahbubnagar", code: "3607" },
    District { name: "Warangal", code: "3609" },
    District { name: "Saraikela Kharsawan", code: "2021" },
    District { name: "Simdega", code: "2022" },
    District { name: "Jaintia Hills", code: "1707" },
    District { name: "Anantapuram", code: "2822" },
    District { name: "Dhalai", code: "1603" },
    District { name: "Changlang", code: "1212" },
    District { name: "Unakoti", code: "1609" },
    District { name: "West", code: "1601" },
    District { name: "West Godavari", code: "2815" },
    District { name: "Bhadrak", code: "2109" },
    District { name: "Sheopur", code: "2301" },
    District { name: "Jabalpur", code: "2339" },
    District { name: "Koriya", code: "2201" },
    District { name: "Jehanabad", code: "1033" },
    District { name: "Aurangabad", code: "2719" },
    District { name: "Barwani", code: "2328" },
    District { name: "Dewas", code: "2323" },
    District { name: "East Nimar", code: "2329" },
    District { name: "Washim", code: "2706" },
    District { name: "Mumbai City", code: "2723" },
    District { name: "Ri-Bhoi", code: "1705" },
    District { name: "West Kameng", code: "1202" },
    District { name: "North 24 Parganas", code: "1911" },
    District { name: "Kamrup", code: "1806" },
    District { name: "Karbi Anglong", code: "1819" },
    District { name: "Anuppur", code: "2346" },
    District { name: "Kochbihar", code: "1903" },
    District { name: "Sheikhpura", code: "1026" },
    District { name: "Katihar", code: "1010" },
    District { name: "Vijayapura", code: "2932" },
    District { name: "Lakhimpur", code: "1812" },
    District { name: "Pashchim Champaran", code: "1001" },
    District { name: "Ganjam", code: "2119" },
    District { name: "Durg", code: "2210" },
    District { name: "Sitamarhi", code: "1004" },
    District { name: "Samastipur", code: "1019" },
    District { name: "Khordha", code: "2117" },
    District { name: "Puri", code: "2118" },
    District { name: "Khowai", code: "1607" },
    District { name: "Allaphuzha", code: "3211" },
    District { name: "Dakshina Kannada", code: "2924" },
    District { name: "Udupi", code: "2916" },
    District { name: "Kottayam", code: "3210" },
    District { name: "Malappuram", code: "3205" },
    District { name: "Ratnagiri", code: "2732" },
    District { name: "Dhamtari", code: "2213" },
    District { name: "Janjgir-Champa", code: "2206" },
    District { name: "Korba", code: "2205" },
    District { name: "Mahasamund", code: "2212" },
    District { name: "Garhwa", code: "2001" },
    District { name: "Amravati", code: "2707" },
    District { name: "Uttara Kannada", code: "2910" },
    District { name: "Kannur", code: "3202" },
    District { name: "Sindhudurg", code: "2733" },
    District { name: "Baleshwar", code: "2108" },
    District { name: "Cuttack", code: "2112" },
    District { name: "Supaul", code: "1006" },
    District { name: "Nilgiris", code: "3311" },
    District { name: "Adilabad", code: "3601" },
    District { name: "Karimnagar", code: "3603" },
    District { name: "Khammam", code: "3610" },
    District { name: "West Midnapore", code: "1919" },
    District { name: "East Godavari", code: "2814" },
    District { name: "Rajkot", code: "2409" },
    District { name: "Banas Kantha", code: "2402" },
    District { name: "Sabar Kantha", code: "2405" },
    District { name: "Kurnool", code: "2821" },
    District { name: "Betul", code: "2335" },
    District { name: "Surat", code: "2422" },
    District { name: "Belagavi", code: "2901" },
    District { name: "Hassan", code: "2923" },
    District { name: "Navsari", code: "2424" },
    District { name: "Shivamogga", code: "2915" },
    District { name: "Krishnagiri", code: "3331" },
    District { name: "Perambalur", code: "3316" },
    District { name: "Dindigul", code: "3313" },
    District { name: "Sangli", code: "2735" },
    District { name: "Ramanagara", code: "2931" },
    District { name: "Coimbatore", code: "3312" },
    District { name: "Nadia", code: "1910" },
    District { name: "South", code: "1602" },
    District { name: "Chittoor", code: "2823" },
    District { name: "Sehore", code: "2333" },
    District { name: "Cachar", code: "1821" },
    District { name: "Hailakandi", code: "1823" },
    District { name: "Solapur", code: "2730" },
    District { name: "West Garo Hills", code: "1701" },
    District { name: "Mokokchung", code: "1303" },
    District { name: "Dimapur", code: "1306" },
    District { name: "Purnia", code: "1009" },
    District { name: "Saharsa", code: "1012" },
    District { name: "Mon", code: "1301" },
    District { name: "Kodagu", code: "2925" },
    District { name: "Rayagada", code: "2127" },
    District { name: "North", code: "1604" },
    District { name: "Nayagarh", code: "2116" },
    District { name: "Palakkad", code: "3206" },
    District { name: "Pattanamtitta", code: "3212" },
    District { name: "Wayanad", code: "3203" },
    District { name: "Idukki", code: "3209" },
    District { name: "Thrissur", code: "3207" },
    District { name: "Panch Mahals", code: "2417" },
    District { name: "Purba Singhbhum", code: "2018" },
    District { name: "Ahmadnagar", code: "2726" },
    District { name: "Bengaluru", code: "2920" },
    District { name: "Nashik", code: "2720" },
    District { name: "Chhatarpur", code: "2309" },
    District { name: "Neemuch", code: "2318" },
    District { name: "East Sikkim", code: "1104" },
    District { name: "Darjiling", code: "1901" },
    District { name: "Bolangir", code: "2124" },
    District { name: "South Garo Hills", code: "1703" },
    District { name: "East Imphal", code: "1407" },
    District { name: "Thoubal", code: "1405" },
    District { name: "Mamit", code: "1501" },
    District { name: "Phek", code: "1308" },
    District { name: "Wokha", code: "1305" },
    District { name: "Kandhamal", code: "2121" },
    District { name: "Saiha", code: "1508" },
    District { name: "Pulwama", code: "0105" },
    District { name: "Doda", code: "0109" },
    District { name: "Poonch", code: "0111" },
    District { name: "Shimla", code: "0211" },
    District { name: "Saharanpur", code: "0901" },
    District { name: "Karnal", code: "0606" },
    District { name: "Farrukhabad", code: "0929" },
    District { name: "Allahabad", code: "0945" },
    District { name: "Ludhiana", code: "0309" },
    District { name: "Hanumangarh", code: "0802" },
    District { name: "Agra", code: "0915" },
    District { name: "Dehra Dun", code: "0505" },
    District { name: "Bundi", code: "0823" },
    District { name: "Jhunjhunun", code: "0805" },
    District { name: "Karauli", code: "0809" },
    District { name: "Deoria", code: "0960" },
    District { name: "Ballia", code: "0963" },
    District { name: "Faizabad", code: "0947" },
    District { name: "Kanpur", code: "0934" },
    District { name: "Kaushambi", code: "0944" },
    District { name: "Azamgarh", code: "0971" },
    District { name: "Sitapur", code: "0924" },
    District { name: "Etah", code: "0917" },
    District { name: "Ghazipur", code: "0965" },
    District { name: "Jaunpur", code: "0964" },
    District { name: "Mainpuri", code: "0918" },
    District { name: "Fatehgarh Sahib", code: "0308" },
    District { name: "Unnao", code: "0926" },
    District { name: "Panchkula", code: "0601" },
    District { name: "Nawan Shehar", code: "0306" },
    District { name: "Pilibhit", code: "0921" },
    District { name: "Jyotiba Phule Nagar", code: "0906" },
    District { name: "Rampur", code: "0905" },
    District { name: "Ambedkar Nagar", code: "0948" },
    District { name: "Hisar", code: "0612" },
    District { name: "Jind", code: "0609" },
    District { name: "Jalaun", code: "0935" },
    District { name: "Shahjahanpur", code: "0922" },
    District { name: "Jhajjar", code: "0615" },
    District { name: "Churu", code: "0804" },
    District { name: "Kurukshetra", code: "0604" },
    District { name: "Maharajganj", code: "0957" },
    District { name: "Ambala", code: "0602" },
    District { name: "Hamirpur", code: "0206" },
    District { name: "Champawat", code: "0510" },
    District { name: "Bathinda", code: "0314" },
    District { name: "Lalitpur", code: "0937" },
    District { name: "Hardoi", code: "0925" },
    District { name: "Jalandhar", code: "0304" },
    District { name: "Mansa", code: "0315" },
    District { name: "Kota", code: "0830" },
    District { name: "Siddharth Nagar", code: "0954" },
    District { name: "Auraiya", code: "0932" },
    District { name: "Rajsamand", code: "0825" },
    District { name: "Lakhimpur Kheri", code: "0923" },
    District { name: "Mau", code: "0962" },
    District { name: "Kushinagar", code: "0959" },
    District { name: "Baghpat", code: "0908" },
    District { name: "Hathras", code: "0913" },
    District { name: "Lucknow", code: "0927" },
    District { name: "Dhaulpur", code: "0808" },
    District { name: "Jhalawar", code: "0832" },
    District { name: "Sant Kabir Nagar", code: "0956" },
    District { name: "Chamoli", code: "0502" },
    District { name: "Rudra Prayag", code: "0503" },
    District { name: "Chittaurgarh", code: "0829" },
    District { name: "Rewari", code: "0617" },
    District { name: "Meerut", code: "0907" },
    District { name: "Aligarh", code: "0912" },
    District { name: "Bhilwara", code: "0824" },
    District { name: "Kansiramnagar", code: "0972" },
    District { name: "Firozabad", code: "0916" },
    District { name: "Faridabad", code: "0619" },
    District { name: "Solan", code: "0209" },
    District { name: "Una", code: "0207" },
    District { name: "Moradabad", code: "0904" },
    District { name: "Sirohi", code: "0819" },
    District { name: "Rohtak", code: "0614" },
    District { name: "Nagaur", code: "0814" },
    District { name: "Bijnor", code: "0903" },
    District { name: "Uttarkashi", code: "0501" },
    District { name: "Kupwara", code: "0101" },
    District { name: "Srinagar", code: "0103" },
    District { name: "Baramulla", code: "0102" },
    District { name: "Chamba", code: "0201" },
    District { name: "Kinnaur", code: "0212" },
    District { name: "Kullu", code: "0204" },
    District { name: "Nuh", code: "0622" },
    District { name: "Pithoragarh", code: "0507" },
    District { name: "Barmer", code: "0817" },
    District { name: "Jaisalmer", code: "0816" },
    District { name: "Jalor", code: "0818" },
    District { name: "Fatehpur", code: "0942" },
    District { name: "Tonk", code: "0822" },
    District { name: "Bara Banki", code: "0946" },
    District { name: "Basti", code: "0955" },
    District { name: "Pratapgarh", code: "0943" },
    District { name: "Rae Bareli", code: "0928" },
    District { name: "Chandauli", code: "0966" },
    District { name: "Banda", code: "0940" },
    District { name: "Chitrakoot", code: "0941" },
    District { name: "Pauri Garhwal", code: "0506" },
    District { name: "Gurdaspur", code: "0301" },
    District { name: "Amritsar", code: "0302" },
    District { name: "Hoshiarpur", code: "0305" },
    District { name: "Bilaspur", code: "0208" },
    District { name: "Sirmaur", code: "0210" },
    District { name: "Mathura", code: "0914" },
    District { name: "Mirzapur", code: "0969" },
    District { name: "Sonbhadra", code: "0970" },
    District { name: "Mahoba", code: "0939" },
    District { name: "Moga", code: "0310" },
    District { name: "Etawah", code: "0931" },
    District { name: "Ghaziabad", code: "0909" },
    District { name: "Jhansi", code: "0936" },
    District { name: "Kanpur Dehat", code: "0933" },
    District { name: "Kapurthala", code: "0303" },
    District { name: "Gorakhpur", code: "0958" },
    District { name: "Kannauj", code: "0930" },
    District { name: "Sirsa", code: "0611" },
    District { name: "Palwal", code: "0623" },
    District { name: "Panipat", code: "0607" },
    District { name: "Faridkot", code: "0313" },
    District { name: "Firozpur", code: "0311" },
    District { name: "Badaun", code: "0919" },
    District { name: "Balrampur", code: "0952" },
    District { name: "Bareilly", code: "0920" },
    District { name: "Muktsar", code: "0312" },
    District { name: "Gonda", code: "0953" },
    District { name: "Shravasti", code: "0951" },
    District { name: "Rupnagar", code: "0307" },
    District { name: "Patiala", code: "0317" },
    District { name: "Bulandshahr", code: "0911" },
    District { name: "Dausa", code: "0811" },
    District { name: "Mahendragarh", code: "0616" },
    District { name: "Bhiwani", code: "0613" },
    District { name: "Gurugram", code: "0618" },
    District { name: "Fatehabad", code: "0610" },
    District { name: "Mandi", code: "0205" },
    District { name: "Leh", code: "0107" },
    District { name: "Alwar", code: "0806" },
    District { name: "Jaipur", code: "0812" },
    District { name: "Ajmer", code: "0821" },
    District { name: "Bharatpur", code: "0807" },
    District { name: "Pali", code: "0820" },
    District { name: "Sangrur", code: "0316" },
    District { name: "Jodhpur", code: "0815" },
    District { name: "Sikar", code: "0813" },
    District { name: "Sawai Madhopur", code: "0810" },
    District { name: "Hamirpur", code: "0938" },
    District { name: "Kargil", code: "0108" },
    District { name: "Rajouri", code: "0112" },
    District { name: "Kangra", code: "0202" },
    District { name: "Dungarpur", code: "0827" },
    District { name: "Bahraich", code: "0950" },
    District { name: "Yamunanagar", code: "0603" },
    District { name: "Muzaffarnagar", code: "0902" },
    District { name: "Haridwar", code: "0513" },
    District { name: "Tehri Garhwal", code: "0504" },
    District { name: "Udham Singh Nagar", code: "0512" },
    District { name: "Udaipur", code: "0826" },
    District { name: "Ganganagar", code: "0801" },
    District { name: "Almora", code: "0509" },
    District { name: "Charkhi Dadri", code: "0621" },
    District { name: "Anantnag", code: "0106" },
    District { name: "Jammu", code: "0113" },
    District { name: "Udhampur", code: "0110" },
    District { name: "Kathua", code: "0114" },
    District { name: "Baran", code: "0831" },
    District { name: "Bikaner", code: "0803" },
    District { name: "Naini Tal", code: "0511" },
    District { name: "Varanasi", code: "0967" },
    District { name: "Kaithal", code: "0605" },
    District { name: "Sonipat", code: "0608" },
    District { name: "Sant Ravi Das Nagar", code: "0968" },
    District { name: "Sultanpur", code: "0949" },
    District { name: "Gautam Buddha Nagar", code: "0910" },
    District { name: "Banswara", code: "0828" },
    District { name: "Badgam", code: "0104" },
    District { name: "Bageshwar", code: "0508" },
    District { name: "Lahul And Spiti", code: "0203" },
];

pub fn find_by_code(code: &str) -> Option<&'static District> {
    let code = code.trim();
    DISTRICTS.iter().find(|d| d.code == code)
}

/// All districts whose name matches case-insensitively.
pub fn find_by_name(name: &str) -> impl Iterator<Item = &'static District> + '_ {
    let name = name.trim();
    DISTRICTS.iter().filter(move |d| d.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_digit_strings() {
        let mut seen = HashSet::new();
        for district in DISTRICTS {
            assert!(!district.code.is_empty(), "{}", district.name);
            assert!(district.code.bytes().all(|b| b.is_ascii_digit()));
            assert!(seen.insert(district.code), "duplicate code {}", district.code);
        }
        assert_eq!(DISTRICTS.len(), 594);
    }

    #[test]
    fn lookup_by_code_and_name() {
        assert_eq!(find_by_code("1028").map(|d| d.name), Some("Patna"));
        assert_eq!(find_by_code(" 0935 ").map(|d| d.name), Some("Jalaun"));
        assert!(find_by_code("9999").is_none());

        let aurangabad: Vec<&str> = find_by_name("aurangabad").map(|d| d.code).collect();
        assert!(aurangabad.len() >= 2);
        assert!(aurangabad.contains(&"1034"));
    }
}
