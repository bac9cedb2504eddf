// src/i18n/phrases.rs  -  Every user-visible phrase in English, Hindi and Gujarati
use super::LocalizedString;

// ── Helper macro ──────────────────────────────────────────────────────────────
// Each entry must name all three languages or the macro does not match.
// Also emits `keys::<name>` so screens can only refer to phrases that exist.
macro_rules! phrase_table {
    ( $( $key:ident => [ $en:literal, $hi:literal, $gu:literal ] ),* $(,)? ) => {
        /// Semantic keys, one per phrase
        #[allow(non_upper_case_globals)]
        pub mod keys {
            $( pub const $key: &str = stringify!($key); )*
        }

        pub(super) static PHRASES: &[(&str, LocalizedString)] = &[
            $( (stringify!($key), LocalizedString::new($en, $hi, $gu)), )*
        ];
    };
}

phrase_table! {
    // ── App chrome ───────────────────────────────────────────────────────────
    appName        => ["FarmConnect", "फार्म कनेक्ट", "ફાર્મ કનેક્ટ"],
    welcome        => ["Welcome to FarmConnect", "फार्म कनेक्ट में आपका स्वागत है", "ફાર્મ કનેક્ટમાં તમારું સ્વાગત છે"],
    tagline        => ["Connecting farmers with skilled farm workers",
                       "किसानों को कुशल कृषि मज़दूरों से जोड़ना",
                       "ખેડૂતોને કુશળ ખેત મજૂરો સાથે જોડવું"],
    language       => ["Language", "भाषा", "ભાષા"],
    signedInAs     => ["Signed in as {name}", "{name} के रूप में साइन इन", "{name} તરીકે સાઇન ઇન"],
    guest          => ["Guest", "अतिथि", "મહેમાન"],

    // ── Landing ──────────────────────────────────────────────────────────────
    getStarted     => ["Get Started", "शुरू करें", "શરૂ કરો"],
    findWork       => ["Find Work", "काम खोजें", "કામ શોધો"],
    findWorkDesc   => ["Browse farm jobs in villages near you and apply in one step",
                       "अपने आस-पास के गाँवों में खेती के काम देखें और एक कदम में आवेदन करें",
                       "તમારી નજીકના ગામોમાં ખેતીનાં કામ જુઓ અને એક પગલામાં અરજી કરો"],
    findWorkers    => ["Find Workers", "मज़दूर खोजें", "મજૂરો શોધો"],
    findWorkersDesc => ["Hire experienced workers for sowing, harvesting and more",
                       "बुवाई, कटाई और अन्य कामों के लिए अनुभवी मज़दूर रखें",
                       "વાવણી, લણણી અને વધુ માટે અનુભવી મજૂરો રાખો"],
    leaseAssets    => ["Lease Assets", "उपकरण किराए पर लें", "સાધનો ભાડે લો"],
    leaseAssetsDesc => ["Rent tractors, pumps and harvesters by the day",
                       "ट्रैक्टर, पंप और हार्वेस्टर रोज़ाना किराए पर लें",
                       "ટ્રેક્ટર, પંપ અને હાર્વેસ્ટર દૈનિક ભાડે લો"],
    statFarmers    => ["{count}+ farmers", "{count}+ किसान", "{count}+ ખેડૂતો"],
    statWorkers    => ["{count}+ workers", "{count}+ मज़दूर", "{count}+ મજૂરો"],
    statVillages   => ["{count}+ villages", "{count}+ गाँव", "{count}+ ગામો"],

    // ── Auth ─────────────────────────────────────────────────────────────────
    login          => ["Login", "लॉगिन", "લૉગિન"],
    register       => ["Register", "पंजीकरण करें", "નોંધણી કરો"],
    logout         => ["Logout", "लॉगआउट", "લૉગઆઉટ"],
    loginTitle     => ["Login to your account", "अपने खाते में लॉगिन करें", "તમારા ખાતામાં લૉગિન કરો"],
    registerTitle  => ["Create a new account", "नया खाता बनाएं", "નવું ખાતું બનાવો"],
    mode           => ["Mode", "प्रकार", "પ્રકાર"],
    role           => ["I am a", "मैं हूँ", "હું છું"],
    farmer         => ["Farmer", "किसान", "ખેડૂત"],
    worker         => ["Worker", "मज़दूर", "મજૂર"],
    name           => ["Full name", "पूरा नाम", "પૂરું નામ"],
    phone          => ["Phone number", "फ़ोन नंबर", "ફોન નંબર"],
    village        => ["Village", "गाँव", "ગામ"],
    password       => ["Password", "पासवर्ड", "પાસવર્ડ"],
    errRequired    => ["Please fill in all required fields",
                       "कृपया सभी आवश्यक फ़ील्ड भरें",
                       "કૃપા કરીને બધા જરૂરી ક્ષેત્રો ભરો"],

    // ── OTP ──────────────────────────────────────────────────────────────────
    otpTitle       => ["Verify your phone", "अपना फ़ोन सत्यापित करें", "તમારો ફોન ચકાસો"],
    otpSentTo      => ["Enter the 6-digit code sent to {phone}",
                       "{phone} पर भेजा गया 6 अंकों का कोड दर्ज करें",
                       "{phone} પર મોકલેલો 6 અંકનો કોડ દાખલ કરો"],
    otpDemoHint    => ["Demo: any 6 digits are accepted",
                       "डेमो: कोई भी 6 अंक स्वीकार किए जाते हैं",
                       "ડેમો: કોઈપણ 6 અંક સ્વીકારવામાં આવે છે"],
    verify         => ["Verify", "सत्यापित करें", "ચકાસો"],
    resendCode     => ["Resend code", "कोड दोबारा भेजें", "કોડ ફરીથી મોકલો"],
    codeResent     => ["A new code has been sent", "नया कोड भेज दिया गया है", "નવો કોડ મોકલવામાં આવ્યો છે"],
    errCode        => ["Enter all 6 digits", "सभी 6 अंक दर्ज करें", "બધા 6 અંક દાખલ કરો"],

    // ── Dashboard sections ───────────────────────────────────────────────────
    dashboard      => ["Dashboard", "डैशबोर्ड", "ડેશબોર્ડ"],
    home           => ["Home", "होम", "હોમ"],
    profile        => ["Profile", "प्रोफ़ाइल", "પ્રોફાઇલ"],
    jobListings    => ["Job Listings", "नौकरी सूची", "નોકરીની યાદી"],
    news           => ["News", "समाचार", "સમાચાર"],
    notifications  => ["Notifications", "सूचनाएं", "સૂચનાઓ"],

    // ── Home ─────────────────────────────────────────────────────────────────
    greeting       => ["Namaste, {name}!", "नमस्ते, {name}!", "નમસ્તે, {name}!"],
    verified       => ["Verified", "सत्यापित", "ચકાસાયેલ"],
    notVerified    => ["Not verified", "सत्यापित नहीं", "ચકાસાયેલ નથી"],
    openJobs       => ["Open jobs", "खुली नौकरियां", "ખુલ્લી નોકરીઓ"],
    applications   => ["My applications", "मेरे आवेदन", "મારી અરજીઓ"],
    leaseRequests  => ["Lease requests", "किराया अनुरोध", "ભાડા વિનંતીઓ"],
    unread         => ["Unread notifications", "अपठित सूचनाएं", "વાંચ્યા વગરની સૂચનાઓ"],

    // ── Listings ─────────────────────────────────────────────────────────────
    perDay         => ["₹{amount}/day", "₹{amount}/दिन", "₹{amount}/દિવસ"],
    workersNeeded  => ["{count} workers needed", "{count} मज़दूर चाहिए", "{count} મજૂરો જોઈએ"],
    durationDays   => ["{count} days", "{count} दिन", "{count} દિવસ"],
    experience     => ["{count} yrs experience", "{count} साल का अनुभव", "{count} વર્ષનો અનુભવ"],
    applicants     => ["{count} applicants", "{count} आवेदक", "{count} અરજદારો"],
    postedBy       => ["Posted by {name}", "{name} द्वारा पोस्ट किया गया", "{name} દ્વારા પોસ્ટ કરાયું"],
    ownedBy        => ["Owner: {name}", "मालिक: {name}", "માલિક: {name}"],
    skills         => ["Skills", "कौशल", "કુશળતા"],
    apply          => ["Apply", "आवेदन करें", "અરજી કરો"],
    applied        => ["Applied", "आवेदन किया", "અરજી કરી"],
    applicationSent => ["Application sent", "आवेदन भेज दिया गया", "અરજી મોકલાઈ ગઈ"],
    alreadyApplied => ["You have already applied for this job",
                       "आप इस काम के लिए पहले ही आवेदन कर चुके हैं",
                       "તમે આ કામ માટે પહેલેથી અરજી કરી છે"],
    hire           => ["Hire", "काम पर रखें", "કામે રાખો"],
    hireSent       => ["Hire request sent", "काम पर रखने का अनुरोध भेजा गया", "કામે રાખવાની વિનંતી મોકલાઈ"],
    requestLease   => ["Request lease", "किराए का अनुरोध करें", "ભાડાની વિનંતી કરો"],
    leaseSent      => ["Lease request sent", "किराए का अनुरोध भेजा गया", "ભાડાની વિનંતી મોકલાઈ"],
    requested      => ["Requested", "अनुरोध किया", "વિનંતી કરી"],
    alreadyRequested => ["Request already sent", "अनुरोध पहले ही भेजा जा चुका है", "વિનંતી પહેલેથી મોકલાઈ ગઈ છે"],
    markedRead     => ["Marked as read", "पढ़ा हुआ चिह्नित किया", "વાંચેલું ચિહ્નિત કર્યું"],
    new            => ["New", "नया", "નવું"],
    nothingHere    => ["Nothing here yet", "अभी यहाँ कुछ नहीं है", "હજી અહીં કંઈ નથી"],

    // ── Profile ──────────────────────────────────────────────────────────────
    editProfile    => ["Edit your profile", "अपनी प्रोफ़ाइल संपादित करें", "તમારી પ્રોફાઇલ સંપાદિત કરો"],
    save           => ["Save", "सहेजें", "સાચવો"],
    profileSaved   => ["Profile saved", "प्रोफ़ाइल सहेजी गई", "પ્રોફાઇલ સાચવવામાં આવી"],

    // ── Job types ────────────────────────────────────────────────────────────
    jobHarvesting  => ["Harvesting", "कटाई", "લણણી"],
    jobSowing      => ["Sowing", "बुवाई", "વાવણી"],
    jobWeeding     => ["Weeding", "निराई", "નીંદણ"],
    jobIrrigation  => ["Irrigation", "सिंचाई", "સિંચાઈ"],
    jobSpraying    => ["Spraying", "छिड़काव", "છંટકાવ"],
    jobPloughing   => ["Ploughing", "जुताई", "ખેડાણ"],

    // ── Asset kinds ──────────────────────────────────────────────────────────
    assetTractor   => ["Tractor", "ट्रैक्टर", "ટ્રેક્ટર"],
    assetHarvester => ["Combine harvester", "कंबाइन हार्वेस्टर", "કમ્બાઇન હાર્વેસ્ટર"],
    assetSprayer   => ["Sprayer", "स्प्रेयर", "સ્પ્રેયર"],
    assetWaterPump => ["Water pump", "पानी का पंप", "પાણીનો પંપ"],
    assetRotavator => ["Rotavator", "रोटावेटर", "રોટાવેટર"],

    // ── Villages ─────────────────────────────────────────────────────────────
    villageAnand   => ["Anand", "आणंद", "આણંદ"],
    villageMehsana => ["Mehsana", "मेहसाणा", "મહેસાણા"],
    villageRajkot  => ["Rajkot", "राजकोट", "રાજકોટ"],
    villageNadiad  => ["Nadiad", "नडियाद", "નડિયાદ"],

    // ── News ─────────────────────────────────────────────────────────────────
    newsMsp        => ["Government raises MSP for wheat",
                       "सरकार ने गेहूं का न्यूनतम समर्थन मूल्य बढ़ाया",
                       "સરકારે ઘઉંના ટેકાના ભાવ વધાર્યા"],
    newsMspBody    => ["The minimum support price for wheat has been increased for the coming season.",
                       "आगामी सीज़न के लिए गेहूं का न्यूनतम समर्थन मूल्य बढ़ा दिया गया है।",
                       "આગામી સીઝન માટે ઘઉંના લઘુતમ ટેકાના ભાવમાં વધારો કરવામાં આવ્યો છે."],
    newsMonsoon    => ["Monsoon expected to arrive early",
                       "मानसून के जल्दी आने की उम्मीद",
                       "ચોમાસું વહેલું આવવાની અપેક્ષા"],
    newsMonsoonBody => ["Farmers are advised to prepare fields for kharif sowing.",
                       "किसानों को खरीफ बुवाई के लिए खेत तैयार करने की सलाह दी जाती है।",
                       "ખેડૂતોને ખરીફ વાવણી માટે ખેતરો તૈયાર કરવાની સલાહ આપવામાં આવે છે."],
    newsDrip       => ["Subsidy on drip irrigation extended",
                       "ड्रिप सिंचाई पर सब्सिडी बढ़ाई गई",
                       "ટપક સિંચાઈ પર સબસિડી લંબાવાઈ"],
    newsDripBody   => ["Small farmers can apply for the drip irrigation subsidy until March.",
                       "छोटे किसान मार्च तक ड्रिप सिंचाई सब्सिडी के लिए आवेदन कर सकते हैं।",
                       "નાના ખેડૂતો માર્ચ સુધી ટપક સિંચાઈ સબસિડી માટે અરજી કરી શકે છે."],

    // ── Notifications ────────────────────────────────────────────────────────
    noticeWelcome  => ["Welcome to FarmConnect! Complete your profile.",
                       "फार्म कनेक्ट में आपका स्वागत है! अपनी प्रोफ़ाइल पूरी करें।",
                       "ફાર્મ કનેક્ટમાં તમારું સ્વાગત છે! તમારી પ્રોફાઇલ પૂર્ણ કરો."],
    noticeNewJob   => ["A new harvesting job was posted near you",
                       "आपके पास कटाई का नया काम पोस्ट किया गया",
                       "તમારી નજીક લણણીનું નવું કામ પોસ્ટ થયું"],
    noticeWeather  => ["Rain expected tomorrow in your area",
                       "कल आपके क्षेत्र में बारिश की संभावना",
                       "આવતીકાલે તમારા વિસ્તારમાં વરસાદની સંભાવના"],

    // ── Key hints ────────────────────────────────────────────────────────────
    hintLanding    => ["Enter: get started   F2: language   Esc: quit",
                       "Enter: शुरू करें   F2: भाषा   Esc: बाहर निकलें",
                       "Enter: શરૂ કરો   F2: ભાષા   Esc: બહાર નીકળો"],
    hintAuth       => ["↑↓: move   ←→: change   Enter: submit   Esc: back",
                       "↑↓: चुनें   ←→: बदलें   Enter: जमा करें   Esc: वापस",
                       "↑↓: પસંદ કરો   ←→: બદલો   Enter: સબમિટ કરો   Esc: પાછા"],
    hintOtp        => ["Type the code   Enter: verify   Tab: resend   Esc: back",
                       "कोड टाइप करें   Enter: सत्यापित करें   Tab: दोबारा भेजें   Esc: वापस",
                       "કોડ લખો   Enter: ચકાસો   Tab: ફરી મોકલો   Esc: પાછા"],
    hintDashboard  => ["Tab: section   ↑↓: select   Enter: action   F2: language   F10: logout",
                       "Tab: भाग   ↑↓: चुनें   Enter: कार्य   F2: भाषा   F10: लॉगआउट",
                       "Tab: વિભાગ   ↑↓: પસંદ કરો   Enter: ક્રિયા   F2: ભાષા   F10: લૉગઆઉટ"],
}
